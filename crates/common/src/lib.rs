//! Common implementations and shared functionality for the nbfield library
//!
//! This crate provides the small amount of integer number theory needed to derive
//! normal-basis multiplication tables.

pub mod math_common;

pub use math_common::{is_prime, powers_mod, reduce_signed};
