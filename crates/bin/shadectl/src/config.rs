//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `shade.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::str::FromStr;

use serde::Deserialize;

use shade_domain::theme::ThemePreference;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Local preference storage settings.
    pub storage: StorageConfig,
    /// Server-side profile settings.
    pub profile: ProfileConfig,
    /// Server synchronization settings.
    pub sync: SyncConfig,
    /// System-signal watch settings.
    pub watch: WatchConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Where the persisted theme preference lives.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path of the preference file.
    pub path: String,
}

/// The profile preference the server rendered for this user, if any.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// `light`, `dark`, or `auto`; absent means no server preference.
    pub preference: Option<String>,
}

/// Server preference-store synchronization.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Whether toggles are pushed to the server at all.
    pub enabled: bool,
    /// Base URL of the server hosting the preference endpoint.
    pub base_url: String,
    /// `Cookie` header string carrying session and anti-forgery cookies.
    pub cookie: String,
}

/// Polling of the operating-system color-scheme signal.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    /// Seconds between system-signal probes in `watch` mode.
    pub interval_secs: u64,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `shade.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if a
    /// value fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("shade.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("SHADE_STORAGE_PATH") {
            self.storage.path = val;
        }
        if let Ok(val) = std::env::var("SHADE_PROFILE_PREFERENCE") {
            self.profile.preference = if val.is_empty() { None } else { Some(val) };
        }
        if let Ok(val) = std::env::var("SHADE_SYNC_ENABLED") {
            if let Ok(enabled) = val.parse() {
                self.sync.enabled = enabled;
            }
        }
        if let Ok(val) = std::env::var("SHADE_SYNC_URL") {
            self.sync.base_url = val;
        }
        if let Ok(val) = std::env::var("SHADE_SYNC_COOKIE") {
            self.sync.cookie = val;
        }
        if let Ok(val) = std::env::var("SHADE_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.path.is_empty() {
            return Err(ConfigError::Validation(
                "storage path must not be empty".to_string(),
            ));
        }
        if let Some(pref) = &self.profile.preference {
            ThemePreference::from_str(pref).map_err(|err| {
                ConfigError::Validation(format!("profile preference: {err}"))
            })?;
        }
        if self.watch.interval_secs == 0 {
            return Err(ConfigError::Validation(
                "watch interval must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// The server-rendered profile preference, already validated.
    #[must_use]
    pub fn server_preference(&self) -> Option<ThemePreference> {
        self.profile
            .preference
            .as_deref()
            .and_then(|pref| pref.parse().ok())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: ".shade/theme".to_string(),
        }
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: "http://127.0.0.1:8000".to_string(),
            cookie: String::new(),
        }
    }
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self { interval_secs: 5 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "shadectl=info,shade=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
