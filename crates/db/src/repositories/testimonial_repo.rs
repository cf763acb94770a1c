//! Repository for the `testimonials` table.

use inkami_core::types::DbId;
use sqlx::PgPool;

use crate::models::testimonial::{CreateTestimonial, Testimonial, UpdateTestimonial};

const COLUMNS: &str = "id, client_name, client_email, rating, review, tattoo_type, avatar_url, \
                       is_approved, display_order, created_at";

/// Provides storage for client testimonials.
pub struct TestimonialRepo;

impl TestimonialRepo {
    /// Insert a new testimonial. Rating defaults to 5; approval starts
    /// false and is flipped by an admin.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTestimonial,
    ) -> Result<Testimonial, sqlx::Error> {
        let query = format!(
            "INSERT INTO testimonials
                (client_name, client_email, rating, review, tattoo_type, avatar_url)
             VALUES ($1, $2, COALESCE($3, 5), $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(&input.client_name)
            .bind(&input.client_email)
            .bind(input.rating)
            .bind(&input.review)
            .bind(&input.tattoo_type)
            .bind(&input.avatar_url)
            .fetch_one(pool)
            .await
    }

    /// List approved testimonials in display order, newest first within
    /// the same order value.
    pub async fn list_approved(pool: &PgPool) -> Result<Vec<Testimonial>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM testimonials WHERE is_approved = TRUE
             ORDER BY display_order ASC, created_at DESC"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update approval state or ordering. Only non-`None` fields apply.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTestimonial,
    ) -> Result<Option<Testimonial>, sqlx::Error> {
        let query = format!(
            "UPDATE testimonials SET
                is_approved = COALESCE($2, is_approved),
                display_order = COALESCE($3, display_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .bind(input.is_approved)
            .bind(input.display_order)
            .fetch_optional(pool)
            .await
    }
}
