//! Public API traits and types for the nbfield library
//!
//! This crate provides the public API surface for the nbfield workspace: the error
//! type shared by every member crate and the trait definitions implemented by the
//! field element types.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use traits::TextEncoding;
