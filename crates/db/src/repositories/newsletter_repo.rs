//! Repository for the `newsletter_subscribers` table.

use sqlx::PgPool;

use crate::models::newsletter::NewsletterSubscriber;

const COLUMNS: &str = "id, email, is_active, created_at";

/// Provides subscribe/unsubscribe storage.
pub struct NewsletterRepo;

impl NewsletterRepo {
    /// Find a subscriber by email, active or not.
    pub async fn find_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<NewsletterSubscriber>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM newsletter_subscribers WHERE email = $1");
        sqlx::query_as::<_, NewsletterSubscriber>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new subscriber.
    pub async fn create(
        pool: &PgPool,
        email: &str,
    ) -> Result<NewsletterSubscriber, sqlx::Error> {
        let query = format!(
            "INSERT INTO newsletter_subscribers (email) VALUES ($1) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NewsletterSubscriber>(&query)
            .bind(email)
            .fetch_one(pool)
            .await
    }

    /// Flip the active flag. Returns `true` if a row was touched.
    pub async fn set_active(
        pool: &PgPool,
        email: &str,
        is_active: bool,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE newsletter_subscribers SET is_active = $2 WHERE email = $1")
                .bind(email)
                .bind(is_active)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
