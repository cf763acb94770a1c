//! Route definitions for the `/testimonials` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::testimonials;
use crate::state::AppState;

/// Routes mounted at `/testimonials`.
///
/// ```text
/// GET  /      -> list (approved only)
/// POST /      -> create (rate limited)
/// PUT  /{id}  -> update (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(testimonials::list).post(testimonials::create))
        .route("/{id}", put(testimonials::update))
}
