//! Sync-specific error type wrapping HTTP failures.

use shade_domain::error::ShadeError;

/// Errors originating from the HTTP sync adapter.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// The request failed in transit or the server rejected it.
    #[error("preference save request failed")]
    Http(#[from] reqwest::Error),

    /// No anti-forgery token was found in the configured cookies.
    #[error("no {0} cookie available for the anti-forgery header")]
    MissingCsrfToken(&'static str),
}

impl From<SyncError> for ShadeError {
    fn from(err: SyncError) -> Self {
        Self::Sync(Box::new(err))
    }
}
