//! Constant-time operations on coefficient vectors
//!
//! Field elements are stored as one `bool` per coefficient. These helpers compare,
//! select and combine such vectors without branching on their contents.

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Constant-time equality of two coefficient slices
///
/// Slices of different length compare unequal; the length itself is public.
pub fn ct_eq_bits(a: &[bool], b: &[bool]) -> Choice {
    if a.len() != b.len() {
        return Choice::from(0);
    }

    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= (*x as u8) ^ (*y as u8);
    }
    diff.ct_eq(&0)
}

/// Constant-time selection of a single coefficient
///
/// Returns `a` if `choice` is 0, `b` if `choice` is 1.
#[inline(always)]
pub fn ct_select_bit(a: bool, b: bool, choice: Choice) -> bool {
    u8::conditional_select(&(a as u8), &(b as u8), choice) != 0
}

/// Constant-time selection of a whole coefficient vector
pub fn ct_select_bits<const N: usize>(a: &[bool; N], b: &[bool; N], choice: Choice) -> [bool; N] {
    let mut result = [false; N];
    for i in 0..N {
        result[i] = ct_select_bit(a[i], b[i], choice);
    }
    result
}

/// Coefficient-wise XOR of two vectors
pub fn ct_xor_bits<const N: usize>(a: &[bool; N], b: &[bool; N]) -> [bool; N] {
    let mut result = [false; N];
    for i in 0..N {
        result[i] = a[i] ^ b[i];
    }
    result
}

/// XOR-fold of every coefficient
pub fn ct_parity(bits: &[bool]) -> bool {
    bits.iter().fold(false, |acc, &b| acc ^ b)
}
