//! Handlers for the `/bookings` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use inkami_core::error::CoreError;
use inkami_core::types::DbId;
use inkami_core::validation::{validate_email, validate_required};
use inkami_db::models::booking::{Booking, CreateBooking, UpdateBooking, BOOKING_STATUSES};
use inkami_db::repositories::BookingRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rate_limit::RateLimited;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// POST /api/v1/bookings
///
/// Public: submit a consultation request.
pub async fn create(
    State(state): State<AppState>,
    _guard: RateLimited,
    Json(input): Json<CreateBooking>,
) -> AppResult<(StatusCode, Json<Booking>)> {
    validate_required("client_name", &input.client_name)?;
    validate_email(&input.email)?;
    validate_required("description", &input.description)?;

    let booking = BookingRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

/// GET /api/v1/bookings/{id}
///
/// Public: look up a booking (clients check their request status).
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Booking>> {
    let booking = BookingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id,
        }))?;
    Ok(Json(booking))
}

/// GET /api/v1/bookings
///
/// Admin: list all bookings, newest first.
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<Booking>>> {
    let bookings = BookingRepo::list(&state.pool).await?;
    Ok(Json(bookings))
}

/// PUT /api/v1/bookings/{id}
///
/// Admin: update booking status or reschedule.
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBooking>,
) -> AppResult<Json<Booking>> {
    if let Some(status) = input.status.as_deref() {
        if !BOOKING_STATUSES.contains(&status) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Unknown booking status: {status}"
            ))));
        }
    }

    let booking = BookingRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id,
        }))?;
    Ok(Json(booking))
}
