//! Error types for the slice crate.

use thiserror::Error;

/// Result type alias for slice operations.
pub type Result<T> = std::result::Result<T, SliceError>;

/// Errors that can occur during slice operations.
#[derive(Debug, Error)]
pub enum SliceError {
    /// A count or index argument was out of its valid domain
    #[error("Invalid argument: {name} must be non-negative, got {value}")]
    InvalidArgument {
        /// Name of the offending parameter
        name: &'static str,
        /// The rejected value
        value: i64,
    },

    /// Unknown separator name
    #[error("Invalid separator: {0:?} (expected line, comma, whitespace or a single character)")]
    InvalidSeparator(String),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Error code for integration with foodshare-core error handling.
/// Range: 11xxx for slice errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceErrorCode {
    /// Negative count passed to a trim operation
    InvalidArgument = 11001,
    /// Unknown separator name
    InvalidSeparator = 11002,
    /// JSON parsing error
    JsonParsing = 11003,
}

impl SliceError {
    /// Returns the error code for this error.
    pub fn code(&self) -> SliceErrorCode {
        match self {
            SliceError::InvalidArgument { .. } => SliceErrorCode::InvalidArgument,
            SliceError::InvalidSeparator(_) => SliceErrorCode::InvalidSeparator,
            SliceError::JsonError(_) => SliceErrorCode::JsonParsing,
        }
    }

    /// Returns true if this is a rejected argument rather than bad input data.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, SliceError::InvalidArgument { .. })
    }
}
