//! Normal-basis binary field arithmetic
//!
//! This crate implements GF(2^N) over a type II optimal normal basis, with
//! GF(2^233) as the instantiated field. The multiplication table is derived once
//! from the Gauss period over `p = 2N + 1` and passed explicitly to every
//! multiplication; there is no global state.
//!
//! # Security Features
//!
//! - Constant-time equality and exponentiation (no branch on exponent bits)
//! - Elements can be wiped with `zeroize`

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Normal basis field arithmetic
pub mod field;
pub use field::{
    exponent_from_text, Element, MultiplicationTable, NormalBasisField, Onb233Element,
    Onb233Field, Onb233Table,
};
