//! Error type definitions for field arithmetic

use thiserror::Error as ThisError;

/// Primary error type for field operations
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Invalid length error with context
    #[error("{context}: invalid length (expected at most {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The requested extension degree has no type II optimal normal basis
    #[error("{context}: no type II normal basis for degree {degree}: {message}")]
    InvalidFieldSize {
        context: &'static str,
        degree: usize,
        message: String,
    },

    /// Invalid parameter error
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Other error
    #[error("{context}: {message}")]
    Other {
        context: &'static str,
        message: String,
    },
}

/// Result type for field operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its details
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidFieldSize { degree, message, .. } => Self::InvalidFieldSize {
                context,
                degree,
                message,
            },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::Other { message, .. } => Self::Other { context, message },
        }
    }

    /// Replace the message of an existing error
    ///
    /// Length errors carry no free-form message and are returned unchanged.
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::InvalidLength { .. } => self,
            Self::InvalidFieldSize { context, degree, .. } => Self::InvalidFieldSize {
                context,
                degree,
                message,
            },
            Self::InvalidParameter { context, .. } => Self::InvalidParameter { context, message },
            Self::Other { context, .. } => Self::Other { context, message },
        }
    }

    /// The context string attached to this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidLength { context, .. }
            | Self::InvalidFieldSize { context, .. }
            | Self::InvalidParameter { context, .. }
            | Self::Other { context, .. } => context,
        }
    }
}
