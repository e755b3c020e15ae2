//! In-memory implementation of `PreferenceSource`.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use shade_app::ports::PreferenceSource;
use shade_domain::theme::ThemePreference;

/// Preference source with a fixed server preference and a mutable system
/// signal. Clones share the signal, so a test can flip it mid-scenario.
#[derive(Debug, Clone)]
pub struct StaticPreferenceSource {
    server: Option<ThemePreference>,
    prefers_dark: Arc<AtomicBool>,
}

impl StaticPreferenceSource {
    /// Create a source with the given server preference and initial signal.
    #[must_use]
    pub fn new(server: Option<ThemePreference>, prefers_dark: bool) -> Self {
        Self {
            server,
            prefers_dark: Arc::new(AtomicBool::new(prefers_dark)),
        }
    }

    /// Flip the simulated operating-system color-scheme signal.
    pub fn set_prefers_dark(&self, prefers_dark: bool) {
        self.prefers_dark.store(prefers_dark, Ordering::Relaxed);
    }
}

impl PreferenceSource for StaticPreferenceSource {
    fn server_preference(&self) -> Option<ThemePreference> {
        self.server
    }

    fn prefers_dark(&self) -> bool {
        self.prefers_dark.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_report_signal_changes_through_clones() {
        let source = StaticPreferenceSource::new(Some(ThemePreference::Auto), false);
        let handle = source.clone();

        handle.set_prefers_dark(true);

        assert!(source.prefers_dark());
        assert_eq!(source.server_preference(), Some(ThemePreference::Auto));
    }
}
