//! Storage port — the locally persisted theme preference.

use std::future::Future;

use shade_domain::error::ShadeError;
use shade_domain::theme::AppliedTheme;

/// A single mutable preference slot scoped to this machine/profile.
///
/// The stored value is always a resolved theme (`light` or `dark`), never
/// `auto`; it survives restarts and is rewritten on every apply.
pub trait PreferenceStore {
    /// Read the persisted theme, or `None` if nothing has been stored yet.
    fn load(&self) -> impl Future<Output = Result<Option<AppliedTheme>, ShadeError>> + Send;

    /// Persist the given theme, replacing any previous value.
    fn save(&self, theme: AppliedTheme) -> impl Future<Output = Result<(), ShadeError>> + Send;
}
