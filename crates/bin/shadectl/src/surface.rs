//! Terminal rendition of the theme surface.

use shade_app::ports::ThemeSurface;
use shade_domain::theme::ControlAffordances;

/// Surface that reports applies on stdout instead of styling a page.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalSurface;

impl TerminalSurface {
    /// Create a terminal surface.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ThemeSurface for TerminalSurface {
    fn set_dark(&self, dark: bool) {
        println!("mode: {}", if dark { "dark" } else { "light" });
    }

    fn update_control(&self, affordances: ControlAffordances) {
        println!("next: {} {}", affordances.icon, affordances.tooltip);
    }
}
