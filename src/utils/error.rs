//! Error types and handling
//!
//! Application-level errors for the web layer. Booking-domain failures
//! (invalid date range, unknown car) are handled inside the page handlers
//! and re-rendered as form banners; the variants here cover everything that
//! escapes that path.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request - invalid input (400)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error (500)
    #[error("Internal error: {0}")]
    Internal(String),

    /// Database error (500)
    #[error("Database error: {0}")]
    Database(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, should_log) = match &self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, false),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, false),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, true),
            AppError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, true),
        };

        // Log server errors
        if should_log {
            error!(error = %self, "Request error");
        }

        // Server errors carry a generic body; the details stay in the log.
        let message = if status.is_server_error() {
            "Something went wrong. Please try again later.".to_string()
        } else {
            self.to_string()
        };

        let body = format!(
            "<!DOCTYPE html>\n<html><head><title>Error</title></head>\
             <body><h1>{}</h1><p>{}</p><a href=\"/\">Back to Home</a></body></html>",
            status.as_u16(),
            message
        );

        (status, Html(body)).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("Record not found".to_string()),
            _ => AppError::Database(err.to_string()),
        }
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
