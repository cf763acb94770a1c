//! Portfolio item entity model and DTOs.

use inkami_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A portfolio item row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PortfolioItem {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image_url: String,
    pub thumbnail_url: Option<String>,
    pub style: Option<String>,
    pub duration: Option<String>,
    pub size: Option<String>,
    pub is_featured: bool,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a portfolio item.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePortfolioItem {
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image_url: String,
    pub thumbnail_url: Option<String>,
    pub style: Option<String>,
    pub duration: Option<String>,
    pub size: Option<String>,
    pub is_featured: Option<bool>,
    pub display_order: Option<i32>,
}

/// DTO for updating a portfolio item. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePortfolioItem {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub style: Option<String>,
    pub duration: Option<String>,
    pub size: Option<String>,
    pub is_featured: Option<bool>,
    pub display_order: Option<i32>,
}
