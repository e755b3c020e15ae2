//! File implementation of [`PreferenceStore`].

use std::future::Future;
use std::path::PathBuf;

use shade_app::ports::PreferenceStore;
use shade_domain::error::ShadeError;
use shade_domain::theme::AppliedTheme;

use crate::error::StorageError;

/// Persists the theme preference as the sole content of a small file.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    /// Create a store backed by the file at `path`.
    ///
    /// The file and its parent directory are created lazily on first save.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this store reads and writes.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> impl Future<Output = Result<Option<AppliedTheme>, ShadeError>> + Send {
        let path = self.path.clone();
        async move {
            let content = match tokio::fs::read_to_string(&path).await {
                Ok(content) => content,
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
                Err(err) => return Err(StorageError::Io(err).into()),
            };
            let theme = content
                .trim()
                .parse::<AppliedTheme>()
                .map_err(StorageError::Corrupt)?;
            Ok(Some(theme))
        }
    }

    fn save(&self, theme: AppliedTheme) -> impl Future<Output = Result<(), ShadeError>> + Send {
        let path = self.path.clone();
        async move {
            if let Some(parent) = path.parent() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(StorageError::Io)?;
            }
            tokio::fs::write(&path, theme.to_string())
                .await
                .map_err(StorageError::Io)?;
            Ok(())
        }
    }
}
