//! Repository for the `contact_messages` table.

use inkami_core::types::DbId;
use sqlx::PgPool;

use crate::models::contact::{ContactMessage, CreateContactMessage};

const COLUMNS: &str = "id, name, email, subject, message, is_read, created_at";

/// Provides storage for contact-form submissions.
pub struct ContactRepo;

impl ContactRepo {
    /// Insert a new message.
    pub async fn create(
        pool: &PgPool,
        input: &CreateContactMessage,
    ) -> Result<ContactMessage, sqlx::Error> {
        let query = format!(
            "INSERT INTO contact_messages (name, email, subject, message)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactMessage>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.subject)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    /// List messages, newest first, optionally unread only.
    pub async fn list(
        pool: &PgPool,
        unread_only: bool,
    ) -> Result<Vec<ContactMessage>, sqlx::Error> {
        let query = if unread_only {
            format!(
                "SELECT {COLUMNS} FROM contact_messages WHERE is_read = FALSE
                 ORDER BY created_at DESC"
            )
        } else {
            format!("SELECT {COLUMNS} FROM contact_messages ORDER BY created_at DESC")
        };
        sqlx::query_as::<_, ContactMessage>(&query)
            .fetch_all(pool)
            .await
    }

    /// Set the read flag on one message.
    pub async fn set_read(
        pool: &PgPool,
        id: DbId,
        is_read: bool,
    ) -> Result<Option<ContactMessage>, sqlx::Error> {
        let query = format!(
            "UPDATE contact_messages SET is_read = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactMessage>(&query)
            .bind(id)
            .bind(is_read)
            .fetch_optional(pool)
            .await
    }
}
