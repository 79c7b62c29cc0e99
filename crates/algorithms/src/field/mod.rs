//! Binary field arithmetic in normal-basis representation
//!
//! Elements of GF(2^N) are stored as N coefficients over a normal basis
//! `{β, β^2, β^4, ..., β^(2^(N-1))}`. In this representation squaring is a cyclic
//! rotation, and multiplication is driven by a precomputed N×N table.

pub mod onb;

pub use onb::{
    exponent_from_text, Element, MultiplicationTable, NormalBasisField, Onb233Element,
    Onb233Field, Onb233Table,
};
