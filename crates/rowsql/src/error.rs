//! Error types for rowsql

use thiserror::Error;

/// Result type alias for rowsql operations
pub type SqlResult<T> = Result<T, SqlError>;

/// Errors produced while preparing or rendering a statement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SqlError {
    /// The parallel column/value/flag sequences disagree in length.
    #[error(
        "Length mismatch: {columns} columns, {values} values, {flags} include flags (all three must be equal)"
    )]
    LengthMismatch {
        columns: usize,
        values: usize,
        flags: usize,
    },

    /// A value could not be converted into a scalar [`Value`](crate::Value).
    #[error("Validation error: {0}")]
    Validation(String),
}

impl SqlError {
    /// Create a length mismatch error from the three observed lengths
    pub fn length_mismatch(columns: usize, values: usize, flags: usize) -> Self {
        Self::LengthMismatch {
            columns,
            values,
            flags,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Check if this is a length mismatch error
    pub fn is_length_mismatch(&self) -> bool {
        matches!(self, Self::LengthMismatch { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_mismatch_message_names_all_lengths() {
        let err = SqlError::length_mismatch(2, 2, 3);
        assert!(err.is_length_mismatch());
        assert_eq!(
            err.to_string(),
            "Length mismatch: 2 columns, 2 values, 3 include flags (all three must be equal)"
        );
    }

    #[test]
    fn validation_is_not_length_mismatch() {
        let err = SqlError::validation("arrays are not scalar");
        assert!(!err.is_length_mismatch());
        assert_eq!(err.to_string(), "Validation error: arrays are not scalar");
    }
}
