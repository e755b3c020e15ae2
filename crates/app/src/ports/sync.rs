//! Sync port — push the chosen theme to the server preference store.

use std::future::Future;

use shade_domain::error::ShadeError;
use shade_domain::theme::AppliedTheme;

/// One state-changing request carrying the new theme value.
///
/// Delivery is fire-and-forget by design: the controller spawns the push,
/// logs a failure, and never retries. Implementations must not block and
/// must not retry on their own.
pub trait PreferenceSync {
    /// Push the given theme to the server preference store.
    fn push(&self, theme: AppliedTheme) -> impl Future<Output = Result<(), ShadeError>> + Send;
}

impl<T: PreferenceSync + Send + Sync> PreferenceSync for std::sync::Arc<T> {
    fn push(&self, theme: AppliedTheme) -> impl Future<Output = Result<(), ShadeError>> + Send {
        (**self).push(theme)
    }
}
