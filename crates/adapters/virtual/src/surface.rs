//! In-memory implementation of `ThemeSurface`.

use std::sync::{Arc, Mutex};

use shade_app::ports::ThemeSurface;
use shade_domain::theme::ControlAffordances;

#[derive(Debug, Default)]
struct SurfaceState {
    dark: bool,
    control: Option<ControlAffordances>,
    control_history: Vec<ControlAffordances>,
}

/// Surface that records everything the controller does to it.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    state: Arc<Mutex<SurfaceState>>,
}

impl RecordingSurface {
    /// Create a surface in its initial (light, no control update) state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the dark-mode flag is currently set.
    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.state.lock().expect("surface mutex poisoned").dark
    }

    /// The most recent control affordances, if any update happened.
    #[must_use]
    pub fn control(&self) -> Option<ControlAffordances> {
        self.state.lock().expect("surface mutex poisoned").control
    }

    /// Every control update in order, for asserting on transitions.
    #[must_use]
    pub fn control_history(&self) -> Vec<ControlAffordances> {
        self.state
            .lock()
            .expect("surface mutex poisoned")
            .control_history
            .clone()
    }
}

impl ThemeSurface for RecordingSurface {
    fn set_dark(&self, dark: bool) {
        self.state.lock().expect("surface mutex poisoned").dark = dark;
    }

    fn update_control(&self, affordances: ControlAffordances) {
        let mut state = self.state.lock().expect("surface mutex poisoned");
        state.control = Some(affordances);
        state.control_history.push(affordances);
    }
}
