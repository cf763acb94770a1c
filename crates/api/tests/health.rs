//! Integration tests for the health check endpoint and general HTTP
//! behaviour (request IDs, CORS, unknown routes).

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get};
use inkami_designgen::{FallbackChain, ProviderSettings};
use tower::ServiceExt;

fn default_chain() -> FallbackChain {
    inkami_designgen::settings::build_chain(&ProviderSettings::default())
        .expect("default chain should build")
}

// ---------------------------------------------------------------------------
// Test: GET /health answers with the expected JSON fields
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_returns_json_report() {
    let app = common::build_test_app(default_chain());
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;

    // No database is running in this test, so the service reports itself
    // degraded rather than failing the request.
    assert!(json["status"] == "ok" || json["status"] == "degraded");
    assert!(json["version"].is_string());
    assert!(json["database"] == "connected" || json["database"] == "unreachable");
}

// ---------------------------------------------------------------------------
// Test: Unknown route returns 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = common::build_test_app(default_chain());
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let app = common::build_test_app(default_chain());
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let request_id = response.headers().get("x-request-id");
    assert!(
        request_id.is_some(),
        "Response must contain an x-request-id header"
    );

    // The value should be a valid UUID (36 chars with hyphens).
    let id_str = request_id.unwrap().to_str().unwrap();
    assert_eq!(id_str.len(), 36, "x-request-id should be a UUID string");
}

// ---------------------------------------------------------------------------
// Test: CORS preflight OPTIONS request returns correct headers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cors_preflight_returns_correct_headers() {
    let app = common::build_test_app(default_chain());

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/v1/design/styles")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "GET")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();

    let allow_origin = headers
        .get("access-control-allow-origin")
        .expect("Missing Access-Control-Allow-Origin header")
        .to_str()
        .unwrap();
    assert_eq!(allow_origin, "http://localhost:5173");

    let allow_methods = headers
        .get("access-control-allow-methods")
        .expect("Missing Access-Control-Allow-Methods header")
        .to_str()
        .unwrap();
    assert!(
        allow_methods.contains("GET"),
        "Allow-Methods should contain GET, got: {allow_methods}"
    );
}

// ---------------------------------------------------------------------------
// Test: auth-gated routes reject unauthenticated requests before any I/O
// ---------------------------------------------------------------------------

#[tokio::test]
async fn admin_routes_require_authentication() {
    let app = common::build_test_app(default_chain());
    let response = get(app, "/api/v1/bookings").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn garbage_bearer_token_is_rejected() {
    let app = common::build_test_app(default_chain());

    let request = Request::builder()
        .uri("/api/v1/auth/me")
        .header("Authorization", "Bearer not-a-real-token")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
