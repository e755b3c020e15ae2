//! Applied theme — the visual mode actually rendered to the user.

use serde::{Deserialize, Serialize};

use crate::error::ParseThemeError;

/// The currently rendered visual mode. Unlike a stored preference this is
/// never `auto`: every source combination resolves down to one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppliedTheme {
    #[default]
    Light,
    Dark,
}

/// What the toggle control should present. All three fields describe the
/// *opposite* state, i.e. the action activating the control performs next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlAffordances {
    /// Glyph shown on the control.
    pub icon: &'static str,
    /// Tooltip text.
    pub tooltip: &'static str,
    /// Accessible name for assistive technology.
    pub accessible_name: &'static str,
}

impl AppliedTheme {
    /// The other theme. Toggling is an involution: `t.inverse().inverse() == t`.
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Resolve the system color-scheme signal to an applied theme.
    #[must_use]
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    /// Whether the document-level dark-mode flag should be set.
    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Control affordances for a page currently showing this theme.
    ///
    /// They advertise the opposite mode: with light applied the control
    /// offers to switch to dark, and vice versa.
    #[must_use]
    pub fn control_affordances(self) -> ControlAffordances {
        match self {
            Self::Light => ControlAffordances {
                icon: "\u{263E}",
                tooltip: "Switch to Dark Mode",
                accessible_name: "Switch to Dark Mode",
            },
            Self::Dark => ControlAffordances {
                icon: "\u{2600}",
                tooltip: "Switch to Light Mode",
                accessible_name: "Switch to Light Mode",
            },
        }
    }
}

impl std::fmt::Display for AppliedTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => f.write_str("light"),
            Self::Dark => f.write_str("dark"),
        }
    }
}

impl std::str::FromStr for AppliedTheme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseThemeError {
                value: other.to_string(),
            }),
        }
    }
}
