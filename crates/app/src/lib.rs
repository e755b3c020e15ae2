//! # shade-app
//!
//! Application layer — the theme controller and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `PreferenceStore` — the single locally persisted theme slot
//!   - `PreferenceSource` — server profile preference + system color-scheme signal
//!   - `ThemeSurface` — the rendered page root and its toggle control
//!   - `PreferenceSync` — fire-and-forget push to the server preference store
//! - Provide the **driving/inbound port** as a use-case struct:
//!   - `ThemeController` — initialize, apply, toggle, react to system changes
//! - Orchestrate domain logic without knowing *how* persistence or IO works
//!
//! ## Dependency rule
//! Depends on `shade-domain` only (plus `tokio` for task spawning).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod controller;
pub mod ports;

pub use controller::ThemeController;
