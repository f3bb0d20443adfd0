// src/error/types.rs
use crate::domain::DomainError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Pool error: {0}")]
    Pool(String),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(String),
}

impl AppError {
    /// Shorthand for a precondition violation raised outside the domain layer.
    pub fn precondition(message: impl Into<String>) -> Self {
        AppError::Domain(DomainError::PreconditionViolation(message.into()))
    }

    /// A record of `kind` with this id does not exist.
    pub fn not_found(kind: &str, id: impl std::fmt::Display) -> Self {
        AppError::Domain(DomainError::NotFound(format!("{} {}", kind, id)))
    }

    /// True for failures raised by the record store rather than by caller input.
    pub fn is_store_failure(&self) -> bool {
        matches!(self, AppError::Database(_) | AppError::Pool(_))
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl From<uuid::Error> for AppError {
    fn from(err: uuid::Error) -> Self {
        AppError::Other(format!("UUID error: {}", err))
    }
}

impl From<r2d2::Error> for AppError {
    fn from(err: r2d2::Error) -> Self {
        AppError::Pool(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_wraps_domain_error() {
        let err = AppError::precondition("cannot move up");
        assert!(matches!(
            err,
            AppError::Domain(DomainError::PreconditionViolation(ref msg)) if msg == "cannot move up"
        ));
        assert!(!err.is_store_failure());
    }

    #[test]
    fn test_store_failures_are_classified() {
        assert!(AppError::Pool("timed out".to_string()).is_store_failure());
        assert!(AppError::Database(rusqlite::Error::QueryReturnedNoRows).is_store_failure());
        assert!(!AppError::not_found("genre", 7).is_store_failure());
    }

    #[test]
    fn test_serializes_as_message() {
        let json = serde_json::to_string(&AppError::not_found("genre", 7)).unwrap();
        assert_eq!(json, "\"Domain error: Entity not found: genre 7\"");
    }
}
