//! Handlers for the `/portfolio` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use inkami_core::error::CoreError;
use inkami_core::types::DbId;
use inkami_core::validation::validate_required;
use inkami_db::models::portfolio::{CreatePortfolioItem, PortfolioItem, UpdatePortfolioItem};
use inkami_db::repositories::PortfolioRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// GET /api/v1/portfolio
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<PortfolioItem>>> {
    let items = PortfolioRepo::list(&state.pool).await?;
    Ok(Json(items))
}

/// GET /api/v1/portfolio/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<PortfolioItem>> {
    let item = PortfolioRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Portfolio item",
            id,
        }))?;
    Ok(Json(item))
}

/// POST /api/v1/portfolio (admin)
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreatePortfolioItem>,
) -> AppResult<(StatusCode, Json<PortfolioItem>)> {
    validate_required("title", &input.title)?;
    validate_required("image_url", &input.image_url)?;

    let item = PortfolioRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /api/v1/portfolio/{id} (admin)
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePortfolioItem>,
) -> AppResult<Json<PortfolioItem>> {
    let item = PortfolioRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Portfolio item",
            id,
        }))?;
    Ok(Json(item))
}

/// DELETE /api/v1/portfolio/{id} (admin)
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = PortfolioRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Portfolio item",
            id,
        }))
    }
}
