//! Core error types for the training center marketing analytics.
//!
//! This module defines transport-agnostic error types. Collaborator-specific
//! errors (HTTP status codes, connection failures, etc.) are converted to these
//! types by the adapter crates.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the marketing analytics core.
///
/// Every variant carries enough context (field name, entity id or period) for a
/// caller to render a specific message instead of a generic failure.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("{entity} '{id}' not found")]
    NotFound { entity: EntityKind, id: String },

    #[error("A target already exists for employee {employee_id} in {month}/{year}")]
    DuplicateTarget {
        employee_id: i64,
        month: u32,
        year: i32,
    },

    #[error("Training center API unavailable: {0}")]
    CollaboratorUnavailable(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Coarse error classification exposed to presentation layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    Validation,
    NotFound,
    DuplicateTarget,
    CollaboratorUnavailable,
    Unexpected,
}

/// Entities the core can look up by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntityKind {
    MarketingTarget,
    MarketingEmployee,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::MarketingTarget => write!(f, "Marketing target"),
            EntityKind::MarketingEmployee => write!(f, "Marketing employee"),
        }
    }
}

/// Validation errors for user input and collaborator payloads.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Field '{field}' must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: String,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("Field '{0}' cannot be changed after creation")]
    ImmutableField(String),

    #[error("Invalid value for '{field}': {message}")]
    InvalidInput { field: String, message: String },
}

impl ValidationError {
    /// Name of the offending field, in the API's camelCase spelling.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::MissingField(field)
            | ValidationError::ImmutableField(field)
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidInput { field, .. } => field,
        }
    }

    pub(crate) fn out_of_range(field: &str, value: i64, min: i64, max: i64) -> Self {
        ValidationError::OutOfRange {
            field: field.to_string(),
            value,
            min,
            max,
        }
    }
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Validation(_) => ErrorKind::Validation,
            Error::NotFound { .. } => ErrorKind::NotFound,
            Error::DuplicateTarget { .. } => ErrorKind::DuplicateTarget,
            Error::CollaboratorUnavailable(_) => ErrorKind::CollaboratorUnavailable,
            Error::Unexpected(_) => ErrorKind::Unexpected,
        }
    }

    /// Offending field for validation failures.
    pub fn field(&self) -> Option<&str> {
        match self {
            Error::Validation(err) => Some(err.field()),
            _ => None,
        }
    }

    /// Returns true if the failure is transient and an idempotent read may be re-issued.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::CollaboratorUnavailable(_))
    }

    pub fn target_not_found(id: i64) -> Self {
        Error::NotFound {
            entity: EntityKind::MarketingTarget,
            id: id.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Unexpected(format!("Malformed payload: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_exposes_field() {
        let err: Error = ValidationError::out_of_range("month", 13, 1, 12).into();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.field(), Some("month"));
        assert_eq!(
            err.to_string(),
            "Input validation failed: Field 'month' must be between 1 and 12, got 13"
        );
    }

    #[test]
    fn test_only_collaborator_failures_are_retryable() {
        assert!(Error::CollaboratorUnavailable("timeout".to_string()).is_retryable());
        assert!(!Error::target_not_found(7).is_retryable());
        assert!(!Error::DuplicateTarget {
            employee_id: 1,
            month: 3,
            year: 2025
        }
        .is_retryable());
    }

    #[test]
    fn test_not_found_message_names_entity_and_id() {
        let err = Error::target_not_found(42);
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.to_string(), "Marketing target '42' not found");
    }

    #[test]
    fn test_error_kind_serialization() {
        assert_eq!(
            serde_json::to_string(&ErrorKind::DuplicateTarget).unwrap(),
            "\"DUPLICATE_TARGET\""
        );
        assert_eq!(
            serde_json::to_string(&ErrorKind::CollaboratorUnavailable).unwrap(),
            "\"COLLABORATOR_UNAVAILABLE\""
        );
    }
}
