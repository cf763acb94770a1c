//! Repository for the `bookings` table.

use inkami_core::types::DbId;
use sqlx::PgPool;

use crate::models::booking::{Booking, CreateBooking, UpdateBooking};

const COLUMNS: &str = "id, client_name, email, phone, preferred_date, description, \
                       placement, size, status, created_at, updated_at";

/// Provides CRUD operations for bookings.
pub struct BookingRepo;

impl BookingRepo {
    /// Insert a new booking request. Status defaults to `pending`.
    pub async fn create(pool: &PgPool, input: &CreateBooking) -> Result<Booking, sqlx::Error> {
        let query = format!(
            "INSERT INTO bookings (client_name, email, phone, preferred_date, description, placement, size)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(&input.client_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(input.preferred_date)
            .bind(&input.description)
            .bind(&input.placement)
            .bind(&input.size)
            .fetch_one(pool)
            .await
    }

    /// Find a booking by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings WHERE id = $1");
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all bookings, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings ORDER BY created_at DESC");
        sqlx::query_as::<_, Booking>(&query).fetch_all(pool).await
    }

    /// Update a booking. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBooking,
    ) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!(
            "UPDATE bookings SET
                status = COALESCE($2, status),
                preferred_date = COALESCE($3, preferred_date),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .bind(&input.status)
            .bind(input.preferred_date)
            .fetch_optional(pool)
            .await
    }
}
