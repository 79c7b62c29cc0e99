//! Literal reference vectors for GF(2^233)
//!
//! Each case gives two operands and an exponent in the fixed-width text encoding,
//! together with the expected sum, product, square of `a` and `a^exponent`.

use once_cell::sync::Lazy;
use serde::Deserialize;

/// A single reference case
#[derive(Debug, Clone, Deserialize)]
pub struct Onb233Case {
    pub name: String,
    pub a: String,
    pub b: String,
    pub exponent: String,
    pub sum: String,
    pub mul: String,
    pub sqr: String,
    pub pow: String,
}

/// The vector file
#[derive(Debug, Clone, Deserialize)]
pub struct Onb233Suite {
    pub field: String,
    pub degree: usize,
    pub cases: Vec<Onb233Case>,
}

/// Parsed contents of `onb233.json`
pub static ONB233_SUITE: Lazy<Onb233Suite> = Lazy::new(|| {
    serde_json::from_str(include_str!("onb233.json")).expect("onb233.json is well-formed")
});
