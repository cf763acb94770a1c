//! Pure domain logic for the Inkami studio backend.
//!
//! This crate has no internal dependencies and no I/O: prompt composition,
//! size/price estimation, validation helpers, and shared error/types live
//! here so the API layer, repositories, and any future CLI tooling can all
//! use them.

pub mod error;
pub mod estimate;
pub mod prompt;
pub mod roles;
pub mod types;
pub mod validation;
