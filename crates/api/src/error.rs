use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use inkami_core::error::CoreError;
use inkami_designgen::ProviderError;
use serde::Serialize;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Every variant renders as the same JSON envelope; nothing bubbles out
/// of a handler as a raw exception.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `inkami_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The image provider chain failed.
    #[error("Image generation failed: {0}")]
    ImageGeneration(#[from] ProviderError),

    /// The client exceeded a rate limit.
    #[error("Rate limit exceeded")]
    TooManyRequests,

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A missing resource that is not addressed by numeric id
    /// (e.g. blog posts by slug, subscribers by email).
    #[error("Not found: {0}")]
    NotFound(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// JSON envelope every failing endpoint answers with.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    code: &'static str,
}

impl AppError {
    /// Resolve to the wire representation: status, machine-readable code,
    /// and the user-facing message.
    fn wire_parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Core(core) => core_parts(core),
            AppError::Database(err) => database_parts(err),
            AppError::ImageGeneration(err) => provider_parts(err),
            AppError::TooManyRequests => (
                StatusCode::TOO_MANY_REQUESTS,
                "RATE_LIMITED",
                "Too many requests. Please try again later.".to_string(),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal_error()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, error) = self.wire_parts();
        (status, Json(ErrorBody { error, code })).into_response()
    }
}

/// The sanitized 500 answer. Detail stays in the log.
fn internal_error() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

fn core_parts(err: &CoreError) -> (StatusCode, &'static str, String) {
    match err {
        CoreError::NotFound { entity, id } => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{entity} with id {id} not found"),
        ),
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
        CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
        CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone()),
        CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
        CoreError::Internal(msg) => {
            tracing::error!(error = %msg, "Internal core error");
            internal_error()
        }
    }
}

/// Classify a sqlx error.
///
/// `RowNotFound` maps to 404; a unique-constraint violation (Postgres
/// code 23505, constraint name prefixed `uq_`) maps to 409; everything
/// else is logged and sanitized to 500.
fn database_parts(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint.starts_with("uq_") {
                    return (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    );
                }
            }
            tracing::error!(error = %db_err, "Database error");
            internal_error()
        }
        other => {
            tracing::error!(error = %other, "Database error");
            internal_error()
        }
    }
}

/// Classify an image-provider error.
///
/// Application-level rejections from the provider (an error fragment in
/// the stream, a `success: false` envelope) carry the provider's own
/// message. Transport failures and exhausted chains collapse into one
/// generic message so network detail never reaches the client; the full
/// error was already logged by the fallback chain.
fn provider_parts(err: &ProviderError) -> (StatusCode, &'static str, String) {
    match err {
        ProviderError::Stream(msg) | ProviderError::Rejected(msg) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "GENERATION_FAILED",
            msg.clone(),
        ),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "GENERATION_FAILED",
            "Failed to generate image. Please try again.".to_string(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400_with_message() {
        let err = AppError::Core(CoreError::Validation("description is required".into()));
        let (status, code, message) = err.wire_parts();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, "VALIDATION_ERROR");
        assert_eq!(message, "description is required");
    }

    #[test]
    fn id_not_found_maps_to_404_naming_the_entity() {
        let err = AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id: 42,
        });
        let (status, _, message) = err.wire_parts();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(message.contains("Booking"));
        assert!(message.contains("42"));
    }

    #[test]
    fn row_not_found_maps_to_404() {
        let err = AppError::Database(sqlx::Error::RowNotFound);
        let (status, code, _) = err.wire_parts();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(code, "NOT_FOUND");
    }

    #[test]
    fn provider_rejection_keeps_the_provider_message() {
        let err = AppError::ImageGeneration(ProviderError::Rejected("nsfw prompt".into()));
        let (status, code, message) = err.wire_parts();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(code, "GENERATION_FAILED");
        assert_eq!(message, "nsfw prompt");
    }

    #[test]
    fn provider_transport_failure_is_generic() {
        let err = AppError::ImageGeneration(ProviderError::Api {
            status: 503,
            body: "upstream detail that must not leak".into(),
        });
        let (_, _, message) = err.wire_parts();
        assert_eq!(message, "Failed to generate image. Please try again.");
    }

    #[test]
    fn internal_detail_never_reaches_the_message() {
        let err = AppError::InternalError("connection pool exhausted at 10.0.0.3".into());
        let (status, _, message) = err.wire_parts();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, "An internal error occurred");
    }

    #[test]
    fn rate_limit_maps_to_429() {
        let (status, code, _) = AppError::TooManyRequests.wire_parts();
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(code, "RATE_LIMITED");
    }
}
