//! # shade-adapter-sync-http
//!
//! HTTP implementation of the `PreferenceSync` port using
//! [reqwest](https://docs.rs/reqwest).
//!
//! ## Responsibilities
//! - Issue the single state-changing request:
//!   `POST /assistant/api/preferences/save/` with body `{"theme": "<value>"}`
//! - Carry the `X-CSRFToken` header, sourced from the same-named cookie
//! - Map transport failures and rejection statuses to a typed adapter error
//! - Never retry: delivery guarantees stay with the caller's
//!   fire-and-forget policy
//!
//! ## Dependency rule
//! Depends on `shade-app` (for the port trait) and `shade-domain` (for
//! domain types). The `app` and `domain` crates must never reference this
//! adapter.

mod cookie;
mod error;
mod sync;

pub use error::SyncError;
pub use sync::HttpPreferenceSync;
