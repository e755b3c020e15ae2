//! # shade-adapter-storage-file
//!
//! File-backed persistence adapter: the analogue of the browser's single
//! local-storage slot is one small file holding `light` or `dark`.
//!
//! ## Responsibilities
//! - Implement the `PreferenceStore` port defined in `shade-app::ports`
//! - Treat a missing file as "no preference yet", not an error
//! - Map IO and parse failures to a typed adapter error
//!
//! ## Dependency rule
//! Depends on `shade-app` (for the port trait) and `shade-domain` (for
//! domain types). The `app` and `domain` crates must never reference this
//! adapter.

mod error;
mod store;

pub use error::StorageError;
pub use store::FilePreferenceStore;
