//! # shade-domain
//!
//! Pure domain model for the shade theme-preference system.
//!
//! ## Responsibilities
//! - Define the **theme values**: stored preferences (`light`, `dark`, `auto`)
//!   and applied visual modes (`light`, `dark` only)
//! - Define the **control affordances** a toggle control presents (icon,
//!   tooltip, accessible name), always describing the action the control
//!   performs next
//! - Contain the **preference resolution** logic: a pure function of
//!   (server preference, local preference, system signal) → applied theme,
//!   plus the policy for reacting to live system-scheme changes
//! - Define error conventions shared across the workspace
//!
//! ## Dependency rule
//! This crate has **no internal dependencies** and performs no IO.
//! It must never import anything from `app`, adapters, or IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod resolution;
pub mod theme;
