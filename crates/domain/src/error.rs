//! Common error types used across the workspace.
//!
//! Each layer defines its own typed error and converts into [`ShadeError`]
//! at the boundary. Adapter errors arrive boxed so this crate stays free of
//! IO dependencies.

/// Workspace-wide error type.
#[derive(Debug, thiserror::Error)]
pub enum ShadeError {
    /// The local preference store failed to read or write.
    #[error("preference storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The server synchronization request failed.
    #[error("preference sync error")]
    Sync(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A stored or transmitted theme value could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseThemeError),
}

/// A string did not name a known theme value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a theme value: {value:?}")]
pub struct ParseThemeError {
    /// The offending input.
    pub value: String,
}
