//! Route definitions for the `/blog` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::blog;
use crate::state::AppState;

/// Routes mounted at `/blog`.
///
/// ```text
/// GET  /        -> list (?category=&limit=)
/// POST /        -> create (admin)
/// GET  /{slug}  -> get_by_slug
/// PUT  /{slug}  -> update (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(blog::list).post(blog::create))
        .route("/{slug}", get(blog::get_by_slug).put(blog::update))
}
