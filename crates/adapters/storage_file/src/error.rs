//! Storage-specific error type wrapping IO and parse failures.

use shade_domain::error::{ParseThemeError, ShadeError};

/// Errors originating from the file-backed preference store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Reading or writing the preference file failed.
    #[error("preference file IO error")]
    Io(#[from] std::io::Error),

    /// The preference file exists but does not hold a theme value.
    #[error("corrupt preference file")]
    Corrupt(#[from] ParseThemeError),
}

impl From<StorageError> for ShadeError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
