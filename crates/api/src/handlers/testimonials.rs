//! Handlers for the `/testimonials` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use inkami_core::error::CoreError;
use inkami_core::types::DbId;
use inkami_core::validation::{validate_rating, validate_required};
use inkami_db::models::testimonial::{CreateTestimonial, Testimonial, UpdateTestimonial};
use inkami_db::repositories::TestimonialRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rate_limit::RateLimited;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Response for a successful submission.
#[derive(Debug, Serialize)]
pub struct TestimonialSubmissionResponse {
    pub success: bool,
    pub message: String,
    pub testimonial: Testimonial,
}

/// GET /api/v1/testimonials
///
/// Public: approved testimonials in display order.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Testimonial>>> {
    let testimonials = TestimonialRepo::list_approved(&state.pool).await?;
    Ok(Json(testimonials))
}

/// POST /api/v1/testimonials
///
/// Public: submit a testimonial. It stays hidden until approved.
pub async fn create(
    State(state): State<AppState>,
    _guard: RateLimited,
    Json(input): Json<CreateTestimonial>,
) -> AppResult<(StatusCode, Json<TestimonialSubmissionResponse>)> {
    validate_required("client_name", &input.client_name)?;
    validate_required("review", &input.review)?;
    if let Some(rating) = input.rating {
        validate_rating(rating)?;
    }

    let testimonial = TestimonialRepo::create(&state.pool, &input).await?;

    Ok((
        StatusCode::CREATED,
        Json(TestimonialSubmissionResponse {
            success: true,
            message: "Testimonial submitted for review".to_string(),
            testimonial,
        }),
    ))
}

/// PUT /api/v1/testimonials/{id}
///
/// Admin: approve, reject, or reorder.
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTestimonial>,
) -> AppResult<Json<Testimonial>> {
    let testimonial = TestimonialRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Testimonial",
            id,
        }))?;
    Ok(Json(testimonial))
}
