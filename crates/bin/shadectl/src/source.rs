//! Preference source backed by the operating system's color scheme.

use shade_app::ports::PreferenceSource;
use shade_domain::theme::ThemePreference;

/// Combines the configured profile preference with a live probe of the
/// OS color scheme via the `dark-light` crate.
#[derive(Debug, Clone)]
pub struct SystemPreferenceSource {
    server: Option<ThemePreference>,
}

impl SystemPreferenceSource {
    /// Create a source carrying the given server-rendered preference.
    #[must_use]
    pub fn new(server: Option<ThemePreference>) -> Self {
        Self { server }
    }
}

impl PreferenceSource for SystemPreferenceSource {
    fn server_preference(&self) -> Option<ThemePreference> {
        self.server
    }

    fn prefers_dark(&self) -> bool {
        // An undetectable scheme counts as a light preference.
        matches!(dark_light::detect(), dark_light::Mode::Dark)
    }
}
