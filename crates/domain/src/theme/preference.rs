//! Stored theme preference — the value a preference source can hold.

use serde::{Deserialize, Serialize};

use crate::error::ParseThemeError;
use crate::theme::AppliedTheme;

/// A theme preference as held by a preference source (server profile or
/// local store).
///
/// `Auto` is only meaningful as a stored value: it means "follow the
/// operating-system color scheme" and never appears as an applied state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    Auto,
}

impl ThemePreference {
    /// The fixed applied theme this preference selects, or `None` for
    /// [`Auto`](Self::Auto), which defers to the system signal.
    #[must_use]
    pub fn fixed(self) -> Option<AppliedTheme> {
        match self {
            Self::Light => Some(AppliedTheme::Light),
            Self::Dark => Some(AppliedTheme::Dark),
            Self::Auto => None,
        }
    }
}

impl From<AppliedTheme> for ThemePreference {
    fn from(theme: AppliedTheme) -> Self {
        match theme {
            AppliedTheme::Light => Self::Light,
            AppliedTheme::Dark => Self::Dark,
        }
    }
}

impl std::fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => f.write_str("light"),
            Self::Dark => f.write_str("dark"),
            Self::Auto => f.write_str("auto"),
        }
    }
}

impl std::str::FromStr for ThemePreference {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "auto" => Ok(Self::Auto),
            other => Err(ParseThemeError {
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_resolve_fixed_theme_for_light_and_dark() {
        assert_eq!(ThemePreference::Light.fixed(), Some(AppliedTheme::Light));
        assert_eq!(ThemePreference::Dark.fixed(), Some(AppliedTheme::Dark));
    }

    #[test]
    fn should_have_no_fixed_theme_for_auto() {
        assert_eq!(ThemePreference::Auto.fixed(), None);
    }

    #[test]
    fn should_parse_lowercase_variant_names() {
        assert_eq!("auto".parse(), Ok(ThemePreference::Auto));
        assert_eq!("dark".parse(), Ok(ThemePreference::Dark));
    }

    #[test]
    fn should_reject_unknown_value() {
        let err = "sepia".parse::<ThemePreference>().unwrap_err();
        assert_eq!(err.value, "sepia");
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let json = serde_json::to_string(&ThemePreference::Auto).unwrap();
        assert_eq!(json, "\"auto\"");
        let parsed: ThemePreference = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ThemePreference::Auto);
    }
}
