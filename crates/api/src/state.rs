use std::sync::Arc;

use inkami_designgen::FallbackChain;

use crate::config::ServerConfig;
use crate::middleware::rate_limit::RateLimiter;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: inkami_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Image provider fallback chain for the design tool.
    pub image_provider: Arc<FallbackChain>,
    /// Fixed-window limiter shared by the public submission routes.
    pub rate_limiter: Arc<RateLimiter>,
}
