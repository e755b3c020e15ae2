//! Theme values — stored preferences and applied visual modes.
//!
//! The two types are deliberately distinct: a *preference* may be `auto`
//! (follow the system), but the *applied* state rendered to the user is
//! always resolved down to light or dark.

mod applied;
mod preference;

pub use applied::{AppliedTheme, ControlAffordances};
pub use preference::ThemePreference;
