//! Validation utilities for field primitives

use super::{Error, Result};
use nbfield_common::is_prime;

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate a maximum length
#[inline(always)]
pub fn max_length(context: &'static str, actual: usize, max: usize) -> Result<()> {
    if actual > max {
        return Err(Error::Length {
            context,
            expected: max,
            actual,
        });
    }
    Ok(())
}

/// Validate that `2 * degree + 1` is prime
pub fn gauss_prime(degree: usize) -> Result<u64> {
    let p = 2 * degree as u64 + 1;
    if !is_prime(p) {
        return Err(Error::FieldSize {
            degree,
            reason: format!("2N + 1 = {} is not prime", p).into(),
        });
    }
    Ok(p)
}
