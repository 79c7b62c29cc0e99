//! Error handling for normal-basis field arithmetic

use std::borrow::Cow;

use nbfield_api::{Error as CoreError, Result as CoreResult};
use thiserror::Error as ThisError;

/// The error type for field primitives
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Parameter validation error
    #[error("Invalid parameter '{name}': {reason}")]
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    #[error("Invalid length for {context}: expected at most {expected}, got {actual}")]
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Largest accepted length
        expected: usize,
        /// Actual length
        actual: usize,
    },

    /// The extension degree does not admit a type II optimal normal basis
    #[error("Invalid field size {degree}: {reason}")]
    FieldSize {
        /// Requested extension degree N
        degree: usize,
        /// Which precondition failed
        reason: Cow<'static, str>,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for field primitives
pub type Result<T> = core::result::Result<T, Error>;

/// Result type for table construction
pub type TableResult<T> = Result<T>;

// Implement conversion to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: match name {
                    Cow::Borrowed(s) => s,
                    Cow::Owned(_) => "field parameter",
                },
                message: reason.into_owned(),
            },
            Error::Length { context, expected, actual } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::FieldSize { degree, reason } => CoreError::InvalidFieldSize {
                context: "normal basis table",
                degree,
                message: reason.into_owned(),
            },
        }
    }
}

/// Convert a primitives result to a core result with additional context
#[inline]
pub fn to_core_result<T>(r: Result<T>, ctx: &'static str) -> CoreResult<T> {
    r.map_err(|e| CoreError::from(e).with_context(ctx))
}

// Re-export core error handling traits for convenience
pub use nbfield_api::error::ResultExt;

// Include the validation submodule
pub mod validate;
