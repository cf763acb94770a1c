//! Newsletter subscriber entity model.

use inkami_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A subscriber row. Unsubscribing flips `is_active` rather than deleting,
/// so a returning subscriber is reactivated instead of re-inserted.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NewsletterSubscriber {
    pub id: DbId,
    pub email: String,
    pub is_active: bool,
    pub created_at: Timestamp,
}

/// Request body for subscribe/unsubscribe.
#[derive(Debug, Clone, Deserialize)]
pub struct SubscriptionRequest {
    pub email: String,
}
