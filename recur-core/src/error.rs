//! Error types for recursive traversal

use thiserror::Error;

/// recur error types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecurError {
    /// Top-level value handed to a traversal is a leaf, not a container.
    #[error("Value of type {type_name} is not an iterable container")]
    NotIterable {
        /// Rust type of the rejected value
        type_name: &'static str,
    },
    /// Structure nests deeper than the configured limit.
    #[error("Depth limit exceeded: structure nests deeper than {max_depth} levels")]
    LimitExceeded {
        /// Maximum depth allowed
        max_depth: usize,
    },
    /// Traversal limits are outside the supported range.
    #[error("Invalid traversal limits: {0}")]
    InvalidLimits(String),
}

impl RecurError {
    pub(crate) fn not_iterable<N: ?Sized>() -> Self {
        RecurError::NotIterable {
            type_name: std::any::type_name::<N>(),
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, RecurError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_iterable_names_type() {
        let err = RecurError::not_iterable::<Vec<u8>>();
        assert!(err.to_string().contains("Vec<u8>"));
    }

    #[test]
    fn test_limit_exceeded_message() {
        let err = RecurError::LimitExceeded { max_depth: 4 };
        assert_eq!(
            err.to_string(),
            "Depth limit exceeded: structure nests deeper than 4 levels"
        );
    }
}
