//! Theme controller — use-cases for resolving, applying, and toggling.

use shade_domain::error::ShadeError;
use shade_domain::resolution::{follows_system, resolve_initial};
use shade_domain::theme::{AppliedTheme, ThemePreference};

use crate::ports::{PreferenceSource, PreferenceStore, PreferenceSync, ThemeSurface};

/// Application service driving the theme of one surface.
///
/// Constructed with the four ports injected; the server preference is read
/// once at construction and stays fixed for the controller's lifetime, which
/// mirrors a value rendered into the page before any script runs.
pub struct ThemeController<St, Src, Su, Sy> {
    store: St,
    source: Src,
    surface: Su,
    sync: Sy,
    server_pref: Option<ThemePreference>,
}

impl<St, Src, Su, Sy> ThemeController<St, Src, Su, Sy>
where
    St: PreferenceStore,
    Src: PreferenceSource,
    Su: ThemeSurface,
    Sy: PreferenceSync + Clone + Send + Sync + 'static,
{
    /// Create a controller backed by the given ports.
    pub fn new(store: St, source: Src, surface: Su, sync: Sy) -> Self {
        let server_pref = source.server_preference();
        Self {
            store,
            source,
            surface,
            sync,
            server_pref,
        }
    }

    /// The server preference captured at construction.
    #[must_use]
    pub fn server_preference(&self) -> Option<ThemePreference> {
        self.server_pref
    }

    /// Resolve the initial theme from all three sources and apply it.
    ///
    /// Runs once per controller, at load.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the local preference cannot be read or
    /// the resolved theme cannot be persisted.
    pub async fn initialize(&self) -> Result<AppliedTheme, ShadeError> {
        let local = self.store.load().await?;
        let prefers_dark = self.source.prefers_dark();
        let theme = resolve_initial(self.server_pref, local, prefers_dark);
        self.apply(theme).await?;
        Ok(theme)
    }

    /// Apply a theme: style the surface, update the control, persist.
    ///
    /// The surface flag, the control affordances (describing the opposite
    /// state), and the persisted preference are always written together.
    ///
    /// # Errors
    ///
    /// Returns a storage error if persisting fails; the surface has already
    /// been updated at that point.
    pub async fn apply(&self, theme: AppliedTheme) -> Result<(), ShadeError> {
        self.surface.set_dark(theme.is_dark());
        self.surface.update_control(theme.control_affordances());
        self.store.save(theme).await?;
        tracing::debug!(%theme, "applied theme");
        Ok(())
    }

    /// Switch to the inverse of the persisted theme and sync it upstream.
    ///
    /// The persisted value defaults to `light` when nothing has been stored.
    /// The server push is spawned fire-and-forget: a failure is logged and
    /// never affects local or applied state, and rapid toggles issue
    /// independent, unordered pushes.
    ///
    /// # Errors
    ///
    /// Returns a storage error from reading or persisting the preference.
    pub async fn toggle(&self) -> Result<AppliedTheme, ShadeError> {
        let current = self.store.load().await?.unwrap_or_default();
        let next = current.inverse();
        self.apply(next).await?;

        let sync = self.sync.clone();
        tokio::spawn(async move {
            if let Err(err) = sync.push(next).await {
                tracing::warn!(error = %err, theme = %next, "theme sync failed");
            }
        });

        Ok(next)
    }

    /// React to a live system color-scheme change.
    ///
    /// Re-applies the system-derived theme only while the server preference
    /// is explicitly `auto`; returns whether a re-apply happened. A fixed
    /// server preference or a local-only preference is left untouched.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the re-applied theme cannot be persisted.
    pub async fn on_system_change(&self, prefers_dark: bool) -> Result<bool, ShadeError> {
        if !follows_system(self.server_pref) {
            return Ok(false);
        }
        self.apply(AppliedTheme::from_prefers_dark(prefers_dark))
            .await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shade_domain::theme::ControlAffordances;
    use std::future::Future;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct MemoryStore {
        slot: Arc<Mutex<Option<AppliedTheme>>>,
    }

    impl MemoryStore {
        fn with(theme: AppliedTheme) -> Self {
            Self {
                slot: Arc::new(Mutex::new(Some(theme))),
            }
        }

        fn stored(&self) -> Option<AppliedTheme> {
            *self.slot.lock().unwrap()
        }
    }

    impl PreferenceStore for MemoryStore {
        fn load(&self) -> impl Future<Output = Result<Option<AppliedTheme>, ShadeError>> + Send {
            let value = *self.slot.lock().unwrap();
            async move { Ok(value) }
        }

        fn save(&self, theme: AppliedTheme) -> impl Future<Output = Result<(), ShadeError>> + Send {
            *self.slot.lock().unwrap() = Some(theme);
            async { Ok(()) }
        }
    }

    struct FakeSource {
        server: Option<ThemePreference>,
        dark: bool,
    }

    impl PreferenceSource for FakeSource {
        fn server_preference(&self) -> Option<ThemePreference> {
            self.server
        }

        fn prefers_dark(&self) -> bool {
            self.dark
        }
    }

    #[derive(Clone, Default)]
    struct RecordingSurface {
        dark_flag: Arc<Mutex<bool>>,
        control: Arc<Mutex<Option<ControlAffordances>>>,
    }

    impl RecordingSurface {
        fn is_dark(&self) -> bool {
            *self.dark_flag.lock().unwrap()
        }

        fn tooltip(&self) -> Option<&'static str> {
            self.control.lock().unwrap().map(|c| c.tooltip)
        }
    }

    impl ThemeSurface for RecordingSurface {
        fn set_dark(&self, dark: bool) {
            *self.dark_flag.lock().unwrap() = dark;
        }

        fn update_control(&self, affordances: ControlAffordances) {
            *self.control.lock().unwrap() = Some(affordances);
        }
    }

    #[derive(Clone, Default)]
    struct RecordingSync {
        pushes: Arc<Mutex<Vec<AppliedTheme>>>,
        fail: bool,
    }

    impl RecordingSync {
        fn failing() -> Self {
            Self {
                pushes: Arc::default(),
                fail: true,
            }
        }

        fn pushed(&self) -> Vec<AppliedTheme> {
            self.pushes.lock().unwrap().clone()
        }
    }

    impl PreferenceSync for RecordingSync {
        fn push(&self, theme: AppliedTheme) -> impl Future<Output = Result<(), ShadeError>> + Send {
            let pushes = Arc::clone(&self.pushes);
            let fail = self.fail;
            async move {
                if fail {
                    return Err(ShadeError::Sync("connection refused".into()));
                }
                pushes.lock().unwrap().push(theme);
                Ok(())
            }
        }
    }

    type TestController = ThemeController<MemoryStore, FakeSource, RecordingSurface, RecordingSync>;

    fn controller(
        store: MemoryStore,
        server: Option<ThemePreference>,
        dark: bool,
    ) -> (TestController, RecordingSurface, RecordingSync) {
        let surface = RecordingSurface::default();
        let sync = RecordingSync::default();
        let ctrl = ThemeController::new(
            store,
            FakeSource { server, dark },
            surface.clone(),
            sync.clone(),
        );
        (ctrl, surface, sync)
    }

    /// Let spawned fire-and-forget tasks run on the current-thread runtime.
    async fn drain_spawned() {
        tokio::task::yield_now().await;
        tokio::task::yield_now().await;
    }

    #[tokio::test]
    async fn should_apply_and_persist_together() {
        let store = MemoryStore::default();
        let (ctrl, surface, _) = controller(store.clone(), None, false);

        ctrl.apply(AppliedTheme::Dark).await.unwrap();

        assert!(surface.is_dark());
        assert_eq!(surface.tooltip(), Some("Switch to Light Mode"));
        assert_eq!(store.stored(), Some(AppliedTheme::Dark));
    }

    #[tokio::test]
    async fn should_resolve_system_signal_when_no_preference_exists() {
        let (ctrl, surface, _) = controller(MemoryStore::default(), None, true);
        let theme = ctrl.initialize().await.unwrap();

        assert_eq!(theme, AppliedTheme::Dark);
        assert!(surface.is_dark());
    }

    #[tokio::test]
    async fn should_let_server_preference_win_over_local() {
        let store = MemoryStore::with(AppliedTheme::Light);
        let (ctrl, surface, _) = controller(store.clone(), Some(ThemePreference::Dark), false);

        let theme = ctrl.initialize().await.unwrap();

        assert_eq!(theme, AppliedTheme::Dark);
        assert!(surface.is_dark());
        assert_eq!(store.stored(), Some(AppliedTheme::Dark));
    }

    #[tokio::test]
    async fn should_follow_system_when_server_preference_is_auto() {
        let store = MemoryStore::with(AppliedTheme::Light);
        let (ctrl, _, _) = controller(store, Some(ThemePreference::Auto), true);

        let theme = ctrl.initialize().await.unwrap();
        assert_eq!(theme, AppliedTheme::Dark);
    }

    #[tokio::test]
    async fn should_prefer_local_when_server_is_absent() {
        let store = MemoryStore::with(AppliedTheme::Dark);
        let (ctrl, _, _) = controller(store, None, false);

        let theme = ctrl.initialize().await.unwrap();
        assert_eq!(theme, AppliedTheme::Dark);
    }

    #[tokio::test]
    async fn should_toggle_from_default_light_to_dark_and_sync() {
        let store = MemoryStore::default();
        let (ctrl, surface, sync) = controller(store.clone(), None, false);

        let theme = ctrl.toggle().await.unwrap();
        drain_spawned().await;

        assert_eq!(theme, AppliedTheme::Dark);
        assert!(surface.is_dark());
        assert_eq!(store.stored(), Some(AppliedTheme::Dark));
        assert_eq!(sync.pushed(), vec![AppliedTheme::Dark]);
    }

    #[tokio::test]
    async fn should_toggle_back_to_original_state() {
        let store = MemoryStore::with(AppliedTheme::Light);
        let (ctrl, _, _) = controller(store.clone(), None, false);

        ctrl.toggle().await.unwrap();
        ctrl.toggle().await.unwrap();
        drain_spawned().await;

        assert_eq!(store.stored(), Some(AppliedTheme::Light));
    }

    #[tokio::test]
    async fn should_keep_local_state_when_sync_fails() {
        let store = MemoryStore::default();
        let surface = RecordingSurface::default();
        let ctrl = ThemeController::new(
            store.clone(),
            FakeSource {
                server: None,
                dark: false,
            },
            surface.clone(),
            RecordingSync::failing(),
        );

        let theme = ctrl.toggle().await.unwrap();
        drain_spawned().await;

        assert_eq!(theme, AppliedTheme::Dark);
        assert!(surface.is_dark());
        assert_eq!(store.stored(), Some(AppliedTheme::Dark));
    }

    #[tokio::test]
    async fn should_reapply_on_system_change_when_server_is_auto() {
        let (ctrl, surface, _) = controller(
            MemoryStore::default(),
            Some(ThemePreference::Auto),
            false,
        );
        ctrl.initialize().await.unwrap();
        assert!(!surface.is_dark());

        let reapplied = ctrl.on_system_change(true).await.unwrap();

        assert!(reapplied);
        assert!(surface.is_dark());
    }

    #[tokio::test]
    async fn should_ignore_system_change_when_server_preference_is_fixed() {
        let (ctrl, surface, _) = controller(
            MemoryStore::default(),
            Some(ThemePreference::Dark),
            false,
        );
        ctrl.initialize().await.unwrap();

        let reapplied = ctrl.on_system_change(false).await.unwrap();

        assert!(!reapplied);
        assert!(surface.is_dark());
    }

    #[tokio::test]
    async fn should_ignore_system_change_when_only_local_preference_exists() {
        let store = MemoryStore::with(AppliedTheme::Dark);
        let (ctrl, surface, _) = controller(store, None, false);
        ctrl.initialize().await.unwrap();

        let reapplied = ctrl.on_system_change(false).await.unwrap();

        assert!(!reapplied);
        assert!(surface.is_dark());
    }
}
