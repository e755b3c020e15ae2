//! In-memory implementation of `PreferenceStore`.

use std::future::Future;
use std::sync::{Arc, Mutex};

use shade_app::ports::PreferenceStore;
use shade_domain::error::ShadeError;
use shade_domain::theme::AppliedTheme;

/// Preference slot held in memory. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    slot: Arc<Mutex<Option<AppliedTheme>>>,
}

impl MemoryPreferenceStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a persisted theme.
    #[must_use]
    pub fn with(theme: AppliedTheme) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(theme))),
        }
    }

    /// The currently persisted theme, for assertions.
    #[must_use]
    pub fn stored(&self) -> Option<AppliedTheme> {
        *self.slot.lock().expect("store mutex poisoned")
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> impl Future<Output = Result<Option<AppliedTheme>, ShadeError>> + Send {
        let value = self.stored();
        async move { Ok(value) }
    }

    fn save(&self, theme: AppliedTheme) -> impl Future<Output = Result<(), ShadeError>> + Send {
        *self.slot.lock().expect("store mutex poisoned") = Some(theme);
        async { Ok(()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_share_slot_between_clones() {
        let store = MemoryPreferenceStore::new();
        let handle = store.clone();

        store.save(AppliedTheme::Dark).await.unwrap();

        assert_eq!(handle.stored(), Some(AppliedTheme::Dark));
        assert_eq!(handle.load().await.unwrap(), Some(AppliedTheme::Dark));
    }
}
