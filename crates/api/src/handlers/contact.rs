//! Handlers for the `/contact` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use inkami_core::error::CoreError;
use inkami_core::types::DbId;
use inkami_core::validation::{validate_email, validate_required};
use inkami_db::models::contact::{ContactMessage, CreateContactMessage, UpdateContactMessage};
use inkami_db::repositories::ContactRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rate_limit::RateLimited;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Query parameters for the admin listing.
#[derive(Debug, Deserialize)]
pub struct ContactListQuery {
    pub unread: Option<bool>,
}

/// Response for a successful submission.
#[derive(Debug, Serialize)]
pub struct ContactSubmissionResponse {
    pub success: bool,
    pub message: String,
    pub submission: ContactMessage,
}

/// POST /api/v1/contact
///
/// Public: submit the contact form.
pub async fn create(
    State(state): State<AppState>,
    _guard: RateLimited,
    Json(input): Json<CreateContactMessage>,
) -> AppResult<(StatusCode, Json<ContactSubmissionResponse>)> {
    validate_required("name", &input.name)?;
    validate_email(&input.email)?;
    validate_required("message", &input.message)?;

    let submission = ContactRepo::create(&state.pool, &input).await?;

    Ok((
        StatusCode::CREATED,
        Json(ContactSubmissionResponse {
            success: true,
            message: "Your message has been sent successfully!".to_string(),
            submission,
        }),
    ))
}

/// GET /api/v1/contact
///
/// Admin: list submissions, optionally `?unread=true`.
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(params): Query<ContactListQuery>,
) -> AppResult<Json<Vec<ContactMessage>>> {
    let messages = ContactRepo::list(&state.pool, params.unread.unwrap_or(false)).await?;
    Ok(Json(messages))
}

/// PUT /api/v1/contact/{id}
///
/// Admin: mark a submission read or unread.
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateContactMessage>,
) -> AppResult<Json<ContactMessage>> {
    let message = ContactRepo::set_read(&state.pool, id, input.is_read)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Contact message",
            id,
        }))?;
    Ok(Json(message))
}
