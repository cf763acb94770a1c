//! Handlers for the `/newsletter` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use inkami_core::error::CoreError;
use inkami_core::validation::validate_email;
use inkami_db::models::newsletter::SubscriptionRequest;
use inkami_db::repositories::NewsletterRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rate_limit::RateLimited;
use crate::response::MessageResponse;
use crate::state::AppState;

/// POST /api/v1/newsletter
///
/// Public: subscribe an email address. A previously unsubscribed address
/// is reactivated rather than re-inserted.
pub async fn subscribe(
    State(state): State<AppState>,
    _guard: RateLimited,
    Json(input): Json<SubscriptionRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    validate_email(&input.email)?;

    if let Some(existing) = NewsletterRepo::find_by_email(&state.pool, &input.email).await? {
        if existing.is_active {
            return Err(AppError::Core(CoreError::Conflict(
                "Email is already subscribed".into(),
            )));
        }
        NewsletterRepo::set_active(&state.pool, &input.email, true).await?;
        return Ok((
            StatusCode::OK,
            Json(MessageResponse::ok(
                "Welcome back! Your subscription has been reactivated.",
            )),
        ));
    }

    NewsletterRepo::create(&state.pool, &input.email).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::ok("Successfully subscribed to newsletter!")),
    ))
}

/// DELETE /api/v1/newsletter
///
/// Public: unsubscribe an email address (soft: the row stays, inactive).
pub async fn unsubscribe(
    State(state): State<AppState>,
    Json(input): Json<SubscriptionRequest>,
) -> AppResult<Json<MessageResponse>> {
    validate_email(&input.email)?;

    let updated = NewsletterRepo::set_active(&state.pool, &input.email, false).await?;
    if !updated {
        return Err(AppError::NotFound("Email not found in subscribers".into()));
    }

    Ok(Json(MessageResponse::ok(
        "Successfully unsubscribed from newsletter",
    )))
}
