//! Error types for the portfolio domain layer.
//!
//! This module defines a small hierarchy of error types:
//!
//! - [`DomainError`] - Business logic and client-correctable errors
//! - [`StorageError`] - Repository errors
//! - [`ErrorCode`] - Stable, client-facing error categories
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// Error Codes
// =============================================================================

/// Client-facing error category.
///
/// The API layer exposes this as `extensions.code` on GraphQL errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    DomainError,
    ValidationError,
    NotFound,
    SystemError,
}

impl ErrorCode {
    /// Wire representation of the code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::DomainError => "DOMAIN_ERROR",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::SystemError => "SYSTEM_ERROR",
        }
    }

    /// HTTP status equivalent, for transports that need one.
    pub fn http_status(&self) -> u16 {
        match self {
            ErrorCode::ValidationError => 400,
            ErrorCode::NotFound => 404,
            ErrorCode::DomainError => 422,
            ErrorCode::SystemError => 500,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Domain Errors
// =============================================================================

/// Business logic and domain rule violations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Pagination cursor could not be decoded.
    #[error("Invalid cursor: {0}")]
    InvalidCursor(String),

    /// Input failed validation. Carries every violation found.
    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    /// Requested entity does not exist.
    #[error("{entity} not found")]
    NotFound {
        /// Entity kind (e.g. "Customer").
        entity: &'static str,
        /// Identifier that was looked up.
        id: String,
    },

    /// Storage operation failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl DomainError {
    /// Client-facing category for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::InvalidCursor(_) | DomainError::Validation(_) => {
                ErrorCode::ValidationError
            }
            DomainError::NotFound { .. } | DomainError::Storage(StorageError::NotFound(_)) => {
                ErrorCode::NotFound
            }
            DomainError::Storage(StorageError::ConstraintViolation(_)) => ErrorCode::DomainError,
            DomainError::Storage(_) => ErrorCode::SystemError,
        }
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Repository errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A uniqueness or referential constraint was violated.
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// Backing store could not serve the request.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    // Test critique: la conversion Storage -> Domain préserve le message
    #[test]
    fn test_error_conversion_chain() {
        let storage_err = StorageError::Unavailable("store offline".into());
        let domain_err: DomainError = storage_err.into();

        assert!(domain_err.to_string().contains("store offline"));
        assert_eq!(domain_err.code(), ErrorCode::SystemError);
    }

    // Le message NotFound ne doit pas exposer l'identifiant
    #[test]
    fn test_not_found_message() {
        let err = DomainError::NotFound {
            entity: "Customer",
            id: "does_not_exist".into(),
        };
        assert_eq!(err.to_string(), "Customer not found");
        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[test]
    fn test_client_errors_map_to_validation() {
        assert_eq!(
            DomainError::InvalidCursor("bad".into()).code(),
            ErrorCode::ValidationError
        );
        let err = DomainError::Validation(vec!["name is required".into(), "x".into()]);
        assert_eq!(err.code(), ErrorCode::ValidationError);
        assert_eq!(err.to_string(), "Validation failed: name is required, x");
    }

    #[test]
    fn test_http_status_mapping() {
        assert_eq!(ErrorCode::ValidationError.http_status(), 400);
        assert_eq!(ErrorCode::NotFound.http_status(), 404);
        assert_eq!(ErrorCode::DomainError.http_status(), 422);
        assert_eq!(ErrorCode::SystemError.http_status(), 500);
        assert_eq!(ErrorCode::NotFound.to_string(), "NOT_FOUND");
    }

    #[test]
    fn test_missing_record_is_not_found() {
        let err: DomainError = StorageError::NotFound("project proj_1".into()).into();
        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[test]
    fn test_duplicate_insert_is_domain_error() {
        let err: DomainError = StorageError::ConstraintViolation("dup".into()).into();
        assert_eq!(err.code(), ErrorCode::DomainError);
    }
}
