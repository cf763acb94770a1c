//! Shared response envelope types for API handlers.
//!
//! Submission endpoints answer with a `{ "success": true, "message": ... }`
//! envelope; use [`MessageResponse`] instead of ad-hoc
//! `serde_json::json!({ ... })` for compile-time type safety and
//! consistent serialization. Content GETs return their rows directly.

use serde::Serialize;

/// Standard acknowledgement envelope for submission endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    /// Build a success acknowledgement.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
