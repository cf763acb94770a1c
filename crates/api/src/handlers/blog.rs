//! Handlers for the `/blog` resource.
//!
//! Posts are addressed by slug on the wire; the numeric id stays internal.
//! `published_at` is stamped the first time a post goes out published and
//! survives later edits.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;

use inkami_core::validation::validate_required;
use inkami_db::models::blog::{BlogPost, CreateBlogPost, UpdateBlogPost};
use inkami_db::repositories::BlogRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Query parameters for the public listing.
#[derive(Debug, Deserialize)]
pub struct BlogListQuery {
    pub category: Option<String>,
    pub limit: Option<i64>,
}

/// GET /api/v1/blog?category=&limit=
///
/// Public: published posts, newest first.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<BlogListQuery>,
) -> AppResult<Json<Vec<BlogPost>>> {
    let posts =
        BlogRepo::list_published(&state.pool, params.category.as_deref(), params.limit).await?;
    Ok(Json(posts))
}

/// GET /api/v1/blog/{slug}
///
/// Public: one published post.
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<BlogPost>> {
    let post = BlogRepo::find_published_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Blog post not found: {slug}")))?;
    Ok(Json(post))
}

/// POST /api/v1/blog (admin)
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<CreateBlogPost>,
) -> AppResult<(StatusCode, Json<BlogPost>)> {
    validate_required("title", &input.title)?;
    validate_required("slug", &input.slug)?;
    validate_required("content", &input.content)?;

    let published_at = input
        .is_published
        .unwrap_or(false)
        .then(Utc::now);

    // A duplicate slug violates uq_blog_posts_slug and surfaces as 409.
    let post = BlogRepo::create(&state.pool, &input, admin.user_id, published_at).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// PUT /api/v1/blog/{slug} (admin)
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(slug): Path<String>,
    Json(input): Json<UpdateBlogPost>,
) -> AppResult<Json<BlogPost>> {
    let existing = BlogRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Blog post not found: {slug}")))?;

    // First publish stamps published_at; it is never cleared afterwards.
    let newly_publishing = input.is_published.unwrap_or(false) && !existing.is_published;
    let published_at = if newly_publishing {
        Some(Utc::now())
    } else {
        existing.published_at
    };

    let post = BlogRepo::update_by_slug(&state.pool, &slug, &input, published_at)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Blog post not found: {slug}")))?;
    Ok(Json(post))
}
