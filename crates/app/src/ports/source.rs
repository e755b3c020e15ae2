//! Preference-source port — server profile preference and system signal.

use shade_domain::theme::ThemePreference;

/// Read side of the two non-local preference sources.
///
/// Both reads are cheap and synchronous: the server preference is rendered
/// into the environment before the controller starts, and the system signal
/// is an OS probe.
pub trait PreferenceSource {
    /// The server-side profile preference, if one was rendered into the
    /// environment. Immutable for the controller's lifetime; this component
    /// never writes it back.
    fn server_preference(&self) -> Option<ThemePreference>;

    /// The live operating-system color-scheme signal.
    fn prefers_dark(&self) -> bool;
}
