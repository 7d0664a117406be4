//! Error types for cursor and column access.
//!
//! Every fallible operation returns one of these as an explicit value;
//! nothing is retried internally and no error state is held anywhere else.

use thiserror::Error;

use crate::cursor::CursorState;

/// A failure reported by the underlying database engine.
///
/// Carries the engine's result code and diagnostic message verbatim. This
/// layer does not interpret codes beyond "row" and "done" during stepping;
/// anything else surfaces here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("engine error (code {code}): {message}")]
pub struct EngineError {
    /// Native result code (extended where the engine provides one).
    pub code: i64,
    /// Diagnostic message from the engine.
    pub message: String,
}

impl EngineError {
    /// Creates an engine error from a code and message.
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Errors that can occur while advancing or reading a result set.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CursorError {
    /// A column was read, or a row materialized, while the cursor was not
    /// positioned on a row.
    #[error("cursor is not positioned on a row (state: {state})")]
    InvalidCursorState {
        /// The state the cursor was actually in.
        state: CursorState,
    },

    /// A positional accessor was given an index past the column range.
    #[error("column index {index} out of range for {count} columns")]
    OutOfRange {
        /// The requested column index.
        index: usize,
        /// The column count of the current result.
        count: usize,
    },

    /// The engine reported a failure during step or finalize.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Convenience alias for results with [`CursorError`].
pub type Result<T> = std::result::Result<T, CursorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CursorError::InvalidCursorState {
            state: CursorState::Created,
        };
        assert_eq!(
            err.to_string(),
            "cursor is not positioned on a row (state: created)"
        );

        let err = CursorError::OutOfRange { index: 3, count: 2 };
        assert_eq!(err.to_string(), "column index 3 out of range for 2 columns");

        let err = CursorError::from(EngineError::new(11, "database disk image is malformed"));
        assert_eq!(
            err.to_string(),
            "engine error (code 11): database disk image is malformed"
        );
    }
}
