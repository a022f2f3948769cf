/**
 * API Error Types
 *
 * The error taxonomy for the whole backend:
 *
 * - `Validation`         - missing or malformed input (400)
 * - `MissingToken`       - no bearer token on a protected route (401)
 * - `TokenExpired`       - token past its expiry; distinguished so clients
 *                          can prompt re-login instead of failing hard (401)
 * - `InvalidToken`       - bad signature, malformed payload, or missing
 *                          identity claim (403)
 * - `InvalidCredentials` - login failure; unknown email and wrong password
 *                          are deliberately indistinguishable (401)
 * - `NotFound`           - resource absent or owned by another user; the
 *                          two cases are not distinguished to avoid leaking
 *                          the existence of other users' resources (404)
 * - `Conflict`           - uniqueness violation (409)
 * - `Database`/`Internal` - unexpected failure (500)
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Backend error type
///
/// Every handler failure is one of these variants. Constructors for the
/// message-carrying variants accept anything `Into<String>`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed input
    #[error("{0}")]
    Validation(String),

    /// No bearer token on a protected route
    #[error("Authentication token is required.")]
    MissingToken,

    /// Token past its expiry
    #[error("Token expired. Please log in again.")]
    TokenExpired,

    /// Bad signature, malformed payload, or missing identity claim
    #[error("Invalid or malformed token.")]
    InvalidToken,

    /// Bad credentials at login
    #[error("Invalid email or password.")]
    InvalidCredentials,

    /// Resource absent or owned by another user
    #[error("{0}")]
    NotFound(String),

    /// Uniqueness violation
    #[error("{0}")]
    Conflict(String),

    /// Database failure
    #[error("Database error")]
    Database(#[from] sqlx::Error),

    /// Any other unexpected failure
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// The HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::MissingToken | Self::TokenExpired | Self::InvalidCredentials => {
                StatusCode::UNAUTHORIZED
            }
            Self::InvalidToken => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The user-visible message for this error
    ///
    /// Database errors are masked with a generic message; the detail is
    /// logged server-side, not sent to the client.
    pub fn message(&self) -> String {
        match self {
            Self::Database(_) => "An internal error occurred. Please try again.".to_string(),
            other => other.to_string(),
        }
    }

    /// SQLSTATE code of the underlying database error, if any
    ///
    /// Used by write handlers to map unique violations (23505) to 409 and
    /// foreign-key violations (23503) to 400.
    pub fn sqlstate(err: &sqlx::Error) -> Option<String> {
        err.as_database_error()
            .and_then(|db| db.code().map(|c| c.to_string()))
    }
}

/// SQLSTATE for unique constraint violations
pub const SQLSTATE_UNIQUE_VIOLATION: &str = "23505";

/// SQLSTATE for foreign-key constraint violations
pub const SQLSTATE_FOREIGN_KEY_VIOLATION: &str = "23503";
