//! Shared harness for the integration tests.
//!
//! [`build_test_app`] goes through the production router builder, so every
//! test request crosses the real middleware stack. The database pool
//! connects lazily; routes that never touch the database run without one.

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use inkami_api::auth::jwt::JwtConfig;
use inkami_api::config::{RateLimitConfig, ServerConfig};
use inkami_api::middleware::rate_limit::RateLimiter;
use inkami_api::router::build_app_router;
use inkami_api::state::AppState;
use inkami_designgen::{FallbackChain, ProviderSettings};

/// A test `ServerConfig` with safe defaults.
///
/// The rate limit is generous so ordinary tests never trip it; rate-limit
/// tests pass a tighter config through [`build_test_app_with`].
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret-long-enough".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
        provider: ProviderSettings::default(),
        rate_limit: RateLimitConfig {
            max_requests: 1000,
            window_secs: 60,
        },
    }
}

/// Build the application with the default test config and the given
/// provider chain.
pub fn build_test_app(chain: FallbackChain) -> Router {
    build_test_app_with(chain, test_config())
}

/// Same as [`build_test_app`] but with a caller-supplied config.
pub fn build_test_app_with(chain: FallbackChain, config: ServerConfig) -> Router {
    // Nothing listens on port 9; any test that actually hits the database
    // fails loudly instead of hanging.
    let pool = sqlx::postgres::PgPoolOptions::new()
        .acquire_timeout(std::time::Duration::from_millis(200))
        .connect_lazy("postgres://localhost:9/inkami_test")
        .expect("lazy pool construction should not fail");

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        image_provider: Arc::new(chain),
        rate_limiter: Arc::new(RateLimiter::new(&config.rate_limit)),
    };

    build_app_router(state, &config)
}

/// Issue a GET request against the app.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request should build"),
    )
    .await
    .expect("request should not fail at the transport level")
}

/// Issue a GET request carrying a bearer token.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .expect("request should build"),
    )
    .await
    .expect("request should not fail at the transport level")
}

/// Issue a POST request with a JSON body against the app.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request should build"),
    )
    .await
    .expect("request should not fail at the transport level")
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}
