//! Error types for OrbitLit
//!
//! Provides a single error enum shared by the catalog crates with:
//! - Distinct variants for each failure mode
//! - Machine-readable error codes
//! - Caller/internal classification for log levels

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

/// Error codes for machine-readable error identification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation errors (1xxx)
    ValidationError,
    EmptyInput,

    // Resource errors (4xxx)
    PublicationNotFound,

    // Conflict errors (5xxx)
    DuplicateId,

    // Internal errors (9xxx)
    InternalError,
    ConfigurationError,
    SerializationError,
}

impl ErrorCode {
    /// Get the numeric code for this error
    pub fn as_code(&self) -> u16 {
        match self {
            // Validation (1xxx)
            ErrorCode::ValidationError => 1001,
            ErrorCode::EmptyInput => 1002,

            // Resources (4xxx)
            ErrorCode::PublicationNotFound => 4001,

            // Conflicts (5xxx)
            ErrorCode::DuplicateId => 5001,

            // Internal (9xxx)
            ErrorCode::InternalError => 9001,
            ErrorCode::ConfigurationError => 9002,
            ErrorCode::SerializationError => 9003,
        }
    }
}

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation failed: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    #[error("Empty input: {operation} requires at least one publication")]
    EmptyInput { operation: String },

    // Resource errors
    #[error("Publication not found: {id}")]
    PublicationNotFound { id: i64 },

    // Conflict errors
    #[error("Duplicate publication id: {id}")]
    DuplicateId { id: i64 },

    // Internal errors
    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // Generic
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Get the error code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { .. } => ErrorCode::ValidationError,
            AppError::EmptyInput { .. } => ErrorCode::EmptyInput,
            AppError::PublicationNotFound { .. } => ErrorCode::PublicationNotFound,
            AppError::DuplicateId { .. } => ErrorCode::DuplicateId,
            AppError::Internal { .. } => ErrorCode::InternalError,
            AppError::Configuration(_) => ErrorCode::ConfigurationError,
            AppError::Serialization(_) => ErrorCode::SerializationError,
            AppError::Other(_) => ErrorCode::InternalError,
        }
    }

    /// Check if this error was caused by the caller's input
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            AppError::Validation { .. }
                | AppError::EmptyInput { .. }
                | AppError::PublicationNotFound { .. }
                | AppError::DuplicateId { .. }
        )
    }

    /// Check if this error should be logged at error level
    pub fn is_internal_error(&self) -> bool {
        !self.is_caller_error()
    }

    /// Log the error at a level matching its severity
    pub fn log(&self) {
        let code = self.code();
        if self.is_internal_error() {
            tracing::error!(error = %self, code = ?code, numeric = code.as_code(), "Internal error");
        } else {
            tracing::warn!(error = %self, code = ?code, numeric = code.as_code(), "Caller error");
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        let field = err.field_errors().keys().next().map(|f| f.to_string());
        AppError::Validation {
            message: err.to_string(),
            field,
        }
    }
}
