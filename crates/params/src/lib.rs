//! Constant values for the nbfield library
//!
//! Field parameters are fixed at compile time; there is no runtime configuration.

pub mod onb;

pub use onb::*;
