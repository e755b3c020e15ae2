//! Preference resolution — pure logic, no page or IO environment.
//!
//! Three sources feed the initial applied theme, in descending priority:
//! the server-side profile preference (read-only, possibly `auto`), the
//! locally persisted preference, and the live system color-scheme signal.

use crate::theme::{AppliedTheme, ThemePreference};

/// Resolve the initial applied theme from the three preference sources.
///
/// Priority order:
/// 1. A server preference of `light` or `dark` wins outright.
/// 2. A server preference of `auto` follows the system signal, ignoring
///    any local preference.
/// 3. With no server preference, the local preference wins if present.
/// 4. Otherwise the system signal decides.
#[must_use]
pub fn resolve_initial(
    server: Option<ThemePreference>,
    local: Option<AppliedTheme>,
    prefers_dark: bool,
) -> AppliedTheme {
    match server {
        Some(pref) => pref
            .fixed()
            .unwrap_or_else(|| AppliedTheme::from_prefers_dark(prefers_dark)),
        None => local.unwrap_or_else(|| AppliedTheme::from_prefers_dark(prefers_dark)),
    }
}

/// Whether a live system-scheme change should be re-applied.
///
/// Only a server preference of explicitly `auto` tracks the system signal
/// after load; a fixed server preference pins the theme, and a local-only
/// preference is never overridden by the listener.
#[must_use]
pub fn follows_system(server: Option<ThemePreference>) -> bool {
    server == Some(ThemePreference::Auto)
}
