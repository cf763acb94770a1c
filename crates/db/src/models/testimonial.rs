//! Testimonial entity model and DTOs.

use inkami_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A testimonial row. Submissions start unapproved and only appear
/// publicly after an admin approves them.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Testimonial {
    pub id: DbId,
    pub client_name: String,
    pub client_email: Option<String>,
    pub rating: i32,
    pub review: String,
    pub tattoo_type: Option<String>,
    pub avatar_url: Option<String>,
    pub is_approved: bool,
    pub display_order: i32,
    pub created_at: Timestamp,
}

/// DTO for submitting a testimonial.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTestimonial {
    pub client_name: String,
    pub client_email: Option<String>,
    pub rating: Option<i32>,
    pub review: String,
    pub tattoo_type: Option<String>,
    pub avatar_url: Option<String>,
}

/// DTO for the admin approval/ordering update.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTestimonial {
    pub is_approved: Option<bool>,
    pub display_order: Option<i32>,
}
