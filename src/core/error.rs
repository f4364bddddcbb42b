//! Error types for Biotools
//!
//! Defines all error types used throughout the library.

use thiserror::Error;

/// Main error type for sequence operations
///
/// Only two kinds of failure exist: a sequence that does not satisfy the
/// character-set precondition of the requested transform, and an operation
/// identifier outside the fixed operation set. Empty input is never an
/// error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// Input failed the DNA/RNA character-set check for the operation
    #[error("{message}")]
    Validation { message: String },

    /// Operation identifier is not in the fixed operation set
    #[error("unsupported operation: {operation}")]
    UnsupportedOperation { operation: String },
}

impl SequenceError {
    /// Create a validation error with the given message
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an unsupported-operation error for the given identifier
    pub fn unsupported(operation: impl Into<String>) -> Self {
        Self::UnsupportedOperation {
            operation: operation.into(),
        }
    }
}

/// Result type alias for sequence operations
pub type Result<T> = std::result::Result<T, SequenceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display() {
        let err = SequenceError::validation("input is not a valid DNA sequence");
        assert_eq!(err.to_string(), "input is not a valid DNA sequence");
    }

    #[test]
    fn test_unsupported_display() {
        let err = SequenceError::unsupported("bogus-op");
        assert_eq!(err.to_string(), "unsupported operation: bogus-op");
    }
}
