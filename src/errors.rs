//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::config::MSG_TUTORIAL_NOT_FOUND;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication
    #[error("Missing or invalid authorization token")]
    Unauthorized,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid or expired token")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    // Resource errors
    /// Missing record or a record owned by another user; the two are not distinguished.
    #[error("{}", MSG_TUTORIAL_NOT_FOUND)]
    NotFound,

    #[error("User with this email already exists")]
    DuplicateEmail,

    // Validation
    #[error("Invalid input: {}", .0.join(", "))]
    Validation(Vec<String>),

    // Storage
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    // Internal
    #[error("{0}")]
    Internal(String),
}

/// Error envelope: `{"message": ...}`
#[derive(Debug, Serialize)]
struct ErrorResponse {
    message: ErrorMessage,
}

/// Validation failures list every violation; everything else carries one message.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum ErrorMessage {
    One(String),
    Many(Vec<String>),
}

impl AppError {
    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized | AppError::InvalidCredentials | AppError::Jwt(_) => {
                StatusCode::UNAUTHORIZED
            }
            AppError::NotFound
            | AppError::DuplicateEmail
            | AppError::Validation(_)
            | AppError::Database(_)
            | AppError::Internal(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn message(self) -> ErrorMessage {
        match self {
            AppError::Validation(messages) => ErrorMessage::Many(messages),
            AppError::Jwt(ref e) => {
                tracing::debug!("JWT rejected: {:?}", e);
                ErrorMessage::One(self.to_string())
            }
            AppError::Database(ref e) => {
                tracing::warn!("Database error: {:?}", e);
                ErrorMessage::One(self.to_string())
            }
            AppError::Internal(ref msg) => {
                tracing::warn!("Internal error: {}", msg);
                ErrorMessage::One(self.to_string())
            }
            other => ErrorMessage::One(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            message: self.message(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(vec![msg.into()])
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
