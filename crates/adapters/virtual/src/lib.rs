//! # shade-adapter-virtual
//!
//! In-memory implementations of every port, for tests and demonstration.
//!
//! ## Provided adapters
//!
//! | Adapter | Port | Behaviour |
//! |---------|------|-----------|
//! | [`MemoryPreferenceStore`] | `PreferenceStore` | Holds the slot in memory |
//! | [`StaticPreferenceSource`] | `PreferenceSource` | Fixed server preference, mutable system signal |
//! | [`RecordingSurface`] | `ThemeSurface` | Captures the flag and every affordance update |
//! | [`RecordingPreferenceSync`] | `PreferenceSync` | Captures pushes, optionally failing |
//!
//! All adapters are cheaply cloneable handles over shared state, so a test
//! can keep a clone for assertions after moving one into the controller.
//!
//! ## Dependency rule
//!
//! Depends on `shade-app` (port traits) and `shade-domain` only.

mod source;
mod store;
mod surface;
mod sync;

pub use source::StaticPreferenceSource;
pub use store::MemoryPreferenceStore;
pub use surface::RecordingSurface;
pub use sync::RecordingPreferenceSync;
