//! Unified error handling.
//!
//! Provides a single error type convertible to tonic gRPC status codes.
//! Staleness of a session is deliberately NOT represented here: it is a
//! legitimate validation outcome carried in the response payload, never an
//! error.

use thiserror::Error;
use tonic::Status;

/// Application error types surfaced over the gRPC boundary.
#[derive(Error, Debug)]
pub enum AppError {
    /// No account matched the supplied credential pair.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// A fetched record's fields disagree with the supplied input after
    /// the explicit re-check.
    #[error("Credential mismatch")]
    Mismatch,

    /// No record matches the lookup key.
    #[error("Resource not found")]
    NotFound,

    // Persistence failures, surfaced verbatim with no retry
    #[cfg(feature = "database")]
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidCredentials => "INVALID_CREDENTIALS",
            AppError::Mismatch => "INVALID_CREDENTIALS",
            AppError::NotFound => "NOT_FOUND",
            #[cfg(feature = "database")]
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // InvalidCredentials and Mismatch carry the identical message so
            // a caller cannot distinguish unknown-user from wrong-password.
            AppError::InvalidCredentials | AppError::Mismatch => {
                "Invalid credentials".to_string()
            }

            #[cfg(feature = "database")]
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            _ => self.to_string(),
        }
    }
}

// =============================================================================
// gRPC Status (Tonic)
// =============================================================================

impl From<AppError> for Status {
    fn from(err: AppError) -> Self {
        let code = match &err {
            AppError::InvalidCredentials | AppError::Mismatch => tonic::Code::Unauthenticated,
            AppError::NotFound => tonic::Code::NotFound,
            #[cfg(feature = "database")]
            AppError::Database(_) => tonic::Code::Internal,
            AppError::Internal(_) => tonic::Code::Internal,
        };

        Status::new(code, err.user_message())
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
    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
