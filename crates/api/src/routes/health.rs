//! Service health endpoint, mounted at the root rather than under
//! `/api/v1` so load balancers and uptime probes reach it unversioned.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Payload for `GET /health`.
#[derive(Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub version: &'static str,
    pub database: &'static str,
}

/// GET /health
///
/// Answers 200 even when the database is down; the body says `degraded`
/// so a probe can tell "process up" apart from "fully serving".
async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    let db_ok = inkami_db::health_check(&state.pool).await.is_ok();

    Json(HealthReport {
        status: if db_ok { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        database: if db_ok { "connected" } else { "unreachable" },
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
