pub mod feed_service;
pub mod media_service;
pub mod tweet_service;
pub mod user_service;

use axum::http::StatusCode;
use sea_orm::DbErr;

/// Service failure: HTTP status, envelope `error_type`, human message.
pub type ServiceError = (StatusCode, &'static str, String);

pub fn bad_request(message: impl Into<String>) -> ServiceError {
    (StatusCode::BAD_REQUEST, "Bad Request", message.into())
}

pub fn forbidden(message: impl Into<String>) -> ServiceError {
    (StatusCode::FORBIDDEN, "Forbidden", message.into())
}

/// Unexpected storage failure; expected misses never reach this path.
pub fn db_err(e: DbErr) -> ServiceError {
    tracing::error!("database error: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal Server Error",
        format!("Database error: {}", e),
    )
}

pub fn io_err(e: std::io::Error) -> ServiceError {
    tracing::error!("filesystem error: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal Server Error",
        format!("Filesystem error: {}", e),
    )
}
