//! In-memory implementation of `PreferenceSync`.

use std::future::Future;
use std::sync::{Arc, Mutex};

use shade_app::ports::PreferenceSync;
use shade_domain::error::ShadeError;
use shade_domain::theme::AppliedTheme;

/// Sync port that records every push instead of touching the network.
#[derive(Debug, Clone, Default)]
pub struct RecordingPreferenceSync {
    pushes: Arc<Mutex<Vec<AppliedTheme>>>,
    fail: bool,
}

impl RecordingPreferenceSync {
    /// Create a sync adapter whose pushes all succeed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sync adapter whose pushes all fail, for exercising the
    /// fire-and-forget error path.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            pushes: Arc::default(),
            fail: true,
        }
    }

    /// Every successfully pushed theme, in order.
    #[must_use]
    pub fn pushed(&self) -> Vec<AppliedTheme> {
        self.pushes.lock().expect("sync mutex poisoned").clone()
    }
}

impl PreferenceSync for RecordingPreferenceSync {
    fn push(&self, theme: AppliedTheme) -> impl Future<Output = Result<(), ShadeError>> + Send {
        let pushes = Arc::clone(&self.pushes);
        let fail = self.fail;
        async move {
            if fail {
                return Err(ShadeError::Sync("simulated network failure".into()));
            }
            pushes.lock().expect("sync mutex poisoned").push(theme);
            Ok(())
        }
    }
}
