//! Surface port — the rendered root and its optional toggle control.

use shade_domain::theme::ControlAffordances;

/// The visual surface the controller drives.
///
/// Both operations are infallible: a surface without a toggle control simply
/// ignores [`update_control`](Self::update_control) and degrades to
/// flag-only styling. That is a normal condition, not an error.
pub trait ThemeSurface {
    /// Set or clear the document-level dark-mode flag.
    fn set_dark(&self, dark: bool);

    /// Update the toggle control's icon, tooltip, and accessible name.
    fn update_control(&self, affordances: ControlAffordances);
}
