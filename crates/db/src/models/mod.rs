//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod blog;
pub mod booking;
pub mod contact;
pub mod newsletter;
pub mod portfolio;
pub mod session;
pub mod testimonial;
pub mod user;
