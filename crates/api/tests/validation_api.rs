//! Integration tests for input validation on the public submission
//! endpoints. All of these reject before touching the database, so they
//! run against the lazy pool.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json};
use inkami_designgen::{FallbackChain, ProviderSettings};
use serde_json::json;

fn app() -> axum::Router {
    let chain = inkami_designgen::settings::build_chain(&ProviderSettings::default())
        .expect("default chain should build");
    common::build_test_app(chain)
}

fn unused() -> FallbackChain {
    FallbackChain::new(vec![])
}

#[tokio::test]
async fn booking_requires_client_name() {
    let response = post_json(
        app(),
        "/api/v1/bookings",
        json!({ "email": "a@b.co", "description": "sleeve consult" }),
    )
    .await;

    // Missing required JSON fields are rejected by deserialization.
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn booking_rejects_invalid_email() {
    let response = post_json(
        app(),
        "/api/v1/bookings",
        json!({
            "client_name": "Mika",
            "email": "not-an-email",
            "description": "sleeve consult"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["error"].as_str().unwrap().contains("email"));
}

#[tokio::test]
async fn contact_requires_message() {
    let response = post_json(
        app(),
        "/api/v1/contact",
        json!({ "name": "Mika", "email": "mika@example.com", "message": "" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("message"));
}

#[tokio::test]
async fn newsletter_rejects_invalid_email() {
    let response = post_json(
        app(),
        "/api/v1/newsletter",
        json!({ "email": "nope" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn testimonial_rejects_out_of_range_rating() {
    let response = post_json(
        app(),
        "/api/v1/testimonials",
        json!({ "client_name": "Mika", "review": "great work", "rating": 9 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("Rating"));
}

#[tokio::test]
async fn empty_provider_chain_never_blocks_validation() {
    // Validation runs before generation, so even an empty chain reports
    // the missing field, not a provider error.
    let app = common::build_test_app(unused());
    let response = post_json(app, "/api/v1/design/generate", json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
