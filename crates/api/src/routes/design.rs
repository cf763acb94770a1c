//! Route definitions for the `/design` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::design;
use crate::state::AppState;

/// Routes mounted at `/design`.
///
/// ```text
/// POST /generate  -> generate (rate limited)
/// GET  /styles    -> styles
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/generate", post(design::generate))
        .route("/styles", get(design::styles))
}
