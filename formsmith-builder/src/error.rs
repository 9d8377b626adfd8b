//! Error types for the builder store

use formsmith_fields::FieldError;
use thiserror::Error;

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur in builder store operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// A field with this name already exists in the collection
    #[error("duplicate field name: {name}")]
    DuplicateName { name: String },

    /// No field with this name exists in the collection
    #[error("field not found: {name}")]
    FieldNotFound { name: String },

    /// An edit operation was attempted with no active session
    #[error("no edit session is active")]
    NotEditing,

    /// The field definition failed shape validation
    #[error(transparent)]
    Invalid(#[from] FieldError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::DuplicateName { name: "age".into() };
        assert_eq!(err.to_string(), "duplicate field name: age");
    }

    #[test]
    fn test_schema_error_passes_through() {
        let err = StoreError::from(FieldError::EmptyName);
        assert_eq!(err.to_string(), "field name cannot be empty");
    }
}
