//! Route definitions for the `/newsletter` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::newsletter;
use crate::state::AppState;

/// Routes mounted at `/newsletter`.
///
/// ```text
/// POST   /  -> subscribe (rate limited)
/// DELETE /  -> unsubscribe
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        post(newsletter::subscribe).delete(newsletter::unsubscribe),
    )
}
