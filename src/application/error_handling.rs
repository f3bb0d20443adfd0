// src/application/error_handling.rs
//
// Error Responses for Commands
//
// ARCHITECTURE:
// - Maps internal errors → user-facing responses
// - Provides one JSON error format for every command
// - Store failures are logged in full, reported in short
// - Each category has its own process exit code

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;
use crate::error::AppError;

/// Standard error response written to stderr
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Record does not exist
    NotFound,

    /// Operation not allowed in the current state (move first record up, ...)
    Precondition,

    /// Invalid payload or field values
    Validation,

    /// Database/persistence error
    Database,

    /// Other/unknown error
    Internal,
}

impl ErrorType {
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorType::Internal => 1,
            ErrorType::Validation => 2,
            ErrorType::NotFound => 3,
            ErrorType::Precondition => 4,
            ErrorType::Database => 5,
        }
    }
}

impl ErrorResponse {
    fn new(error_type: ErrorType, message: impl Into<String>, details: Option<String>) -> Self {
        Self {
            success: false,
            error_type,
            message: message.into(),
            details,
        }
    }

    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        // Full store error goes to the log only
        if error.is_store_failure() {
            log::error!("store failure: {:?}", error);
        }

        match error {
            AppError::Domain(DomainError::NotFound(what)) => {
                Self::new(ErrorType::NotFound, "Record not found", Some(what))
            }

            AppError::Domain(DomainError::PreconditionViolation(reason)) => Self::new(
                ErrorType::Precondition,
                "Operation not allowed",
                Some(reason),
            ),

            AppError::Domain(DomainError::InvariantViolation(reason)) => {
                Self::new(ErrorType::Validation, "Validation failed", Some(reason))
            }

            AppError::Serialization(serde_error) => Self::new(
                ErrorType::Validation,
                "Invalid JSON payload",
                Some(serde_error.to_string()),
            ),

            AppError::Database(_) => Self::new(
                ErrorType::Database,
                "Database operation failed",
                Some("Check logs for details".to_string()),
            ),

            AppError::Pool(_) => Self::new(ErrorType::Database, "Database connection failed", None),

            AppError::Io(io_error) => {
                log::error!("io error: {:?}", io_error);
                Self::new(
                    ErrorType::Internal,
                    "File system operation failed",
                    Some(io_error.to_string()),
                )
            }

            AppError::Other(message) => {
                log::error!("{}", message);
                Self::new(ErrorType::Internal, message, None)
            }
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.error_type.exit_code()
    }
}
