//! Error types for the field schema

use thiserror::Error;

/// Result type for schema operations
pub type Result<T> = std::result::Result<T, FieldError>;

/// Errors raised when a field definition has an invalid shape
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    /// Field name is empty or whitespace-only
    #[error("field name cannot be empty")]
    EmptyName,

    /// Radio or select field with an empty option list
    #[error("field '{name}' must have at least one option")]
    NoOptions { name: String },

    /// Numeric bounds that exclude every value
    #[error("field '{name}' has minimum greater than maximum")]
    InvalidConstraints { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FieldError::NoOptions {
            name: "flavor".into(),
        };
        assert_eq!(err.to_string(), "field 'flavor' must have at least one option");
    }
}
