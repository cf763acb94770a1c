//! Booking (consultation request) entity model and DTOs.

use chrono::NaiveDate;
use inkami_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Statuses a booking moves through. Stored as plain text.
pub const BOOKING_STATUSES: [&str; 4] = ["pending", "confirmed", "completed", "cancelled"];

/// A booking row from the `bookings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Booking {
    pub id: DbId,
    pub client_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub preferred_date: Option<NaiveDate>,
    pub description: String,
    pub placement: Option<String>,
    pub size: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for submitting a booking request.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBooking {
    pub client_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub preferred_date: Option<NaiveDate>,
    pub description: String,
    pub placement: Option<String>,
    pub size: Option<String>,
}

/// DTO for the admin status update.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBooking {
    pub status: Option<String>,
    pub preferred_date: Option<NaiveDate>,
}
