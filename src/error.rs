//! Error types for crepecake
//!
//! All fallible operations return `CrepecakeResult<T>`.

use thiserror::Error;

/// Result type alias for crepecake operations
pub type CrepecakeResult<T> = Result<T, CrepecakeError>;

/// All errors that can occur in crepecake
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CrepecakeError {
    #[error("{0}")]
    InvalidArgument(String),
}

impl CrepecakeError {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Check if error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::InvalidArgument(_) => false,
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::InvalidArgument(_) => {
                Some("Record at least one source file when building a layer")
            }
        }
    }
}
