//! Field elements in normal-basis representation

use core::fmt;
use core::ops::{Add, AddAssign};
use core::str::FromStr;

use nbfield_api::{Error as CoreError, Result as CoreResult, TextEncoding};
use nbfield_internal::constant_time::{ct_eq_bits, ct_parity, ct_select_bits, ct_xor_bits};
use rand::{CryptoRng, RngCore};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

use super::table::MultiplicationTable;
use crate::error::{validate, Error, Result};

/// Element of GF(2^N) over a type II optimal normal basis.
///
/// Coefficient `0` is the leftmost character of the text encoding. Elements are plain
/// values: copies are independent.
#[derive(Clone, Copy)]
pub struct Element<const N: usize> {
    bits: [bool; N],
}

impl<const N: usize> Element<N> {
    /// The additive identity (all coefficients clear)
    pub const fn zero() -> Self {
        Self { bits: [false; N] }
    }

    /// The multiplicative identity.
    ///
    /// In a type II normal basis `1 = β + β^2 + ... + β^(2^(N-1))`, so every
    /// coefficient is set.
    pub const fn one() -> Self {
        Self { bits: [true; N] }
    }

    /// Create an element from its coefficients
    pub const fn from_bits(bits: [bool; N]) -> Self {
        Self { bits }
    }

    /// Coefficient vector, index 0 first
    pub fn bits(&self) -> &[bool; N] {
        &self.bits
    }

    /// Coefficient `i`, or `None` when `i >= N`
    pub fn bit(&self, i: usize) -> Option<bool> {
        self.bits.get(i).copied()
    }

    /// Decode from at most N characters.
    ///
    /// Shorter input is right-aligned with zeros in the leading positions.
    /// `'0'` is a clear coefficient; every other character is a set one.
    pub fn from_text(text: &str) -> Result<Self> {
        let len = text.chars().count();
        validate::max_length("Element::from_text", len, N)?;

        let mut bits = [false; N];
        for (slot, c) in bits[N - len..].iter_mut().zip(text.chars()) {
            *slot = c != '0';
        }
        Ok(Self { bits })
    }

    /// Encode as exactly N characters of `'0'`/`'1'`
    pub fn to_text(&self) -> String {
        self.bits.iter().map(|&b| if b { '1' } else { '0' }).collect()
    }

    /// Sample a uniformly random element
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut bits = [false; N];
        let mut word = 0u64;
        for (i, bit) in bits.iter_mut().enumerate() {
            if i % 64 == 0 {
                word = rng.next_u64();
            }
            *bit = (word >> (i % 64)) & 1 == 1;
        }
        Self { bits }
    }

    /// Check whether this element is zero
    pub fn is_zero(&self) -> bool {
        self.ct_eq(&Self::zero()).into()
    }

    /// Check whether this element is one
    pub fn is_one(&self) -> bool {
        self.ct_eq(&Self::one()).into()
    }

    /// Number of set coefficients
    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Field addition: coefficient-wise XOR
    pub fn add(&self, other: &Self) -> Self {
        Self {
            bits: ct_xor_bits(&self.bits, &other.bits),
        }
    }

    /// Field multiplication.
    ///
    /// Output coefficient `k` is the parity of `u[i] & L[i][j] & v[j]` over all `(i, j)`,
    /// where `u` and `v` are the operands rotated left by `k`. Only the set entries of
    /// each table row are visited.
    pub fn mul(&self, other: &Self, table: &MultiplicationTable<N>) -> Self {
        let mut out = [false; N];
        for (k, slot) in out.iter_mut().enumerate() {
            let mut u = self.bits;
            let mut v = other.bits;
            u.rotate_left(k);
            v.rotate_left(k);

            let mut acc = false;
            for (i, &ui) in u.iter().enumerate() {
                let column = table.row(i).iter().fold(false, |c, &j| c ^ v[j]);
                acc ^= ui & column;
            }
            *slot = acc;
        }
        Self { bits: out }
    }

    /// Squaring (Frobenius): rotate the coefficients right by one position
    pub fn square(&self) -> Self {
        let mut bits = self.bits;
        bits.rotate_right(1);
        Self { bits }
    }

    /// Exponentiation by an exponent given as bits, most significant first.
    ///
    /// Right-to-left square-and-multiply starting from `one()`; an empty exponent
    /// yields `one()`. The product is computed for every bit and kept only when the
    /// bit is set.
    pub fn pow(&self, exponent: &[bool], table: &MultiplicationTable<N>) -> Self {
        let mut result = Self::one();
        let mut base = *self;
        for &bit in exponent.iter().rev() {
            let product = result.mul(&base, table);
            result = Self::conditional_select(&result, &product, Choice::from(bit as u8));
            base = base.square();
        }
        result
    }

    /// Multiplicative inverse, computed as `self^(2^N - 2)`
    pub fn invert(&self, table: &MultiplicationTable<N>) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::param("Element::invert", "zero has no inverse"));
        }

        // 2^N - 2 is N-1 ones followed by a zero
        let mut exponent = vec![true; N];
        if let Some(last) = exponent.last_mut() {
            *last = false;
        }
        Ok(self.pow(&exponent, table))
    }

    /// Absolute trace to GF(2).
    ///
    /// In a normal basis every basis element has trace 1, so this is the parity of
    /// the coefficients.
    pub fn trace(&self) -> bool {
        ct_parity(&self.bits)
    }
}

/// Interpret text as an ordered exponent bit sequence, most significant first.
///
/// `'0'` is a clear bit, every other character a set one; any length is accepted.
pub fn exponent_from_text(text: &str) -> Vec<bool> {
    text.chars().map(|c| c != '0').collect()
}

impl<const N: usize> Default for Element<N> {
    /// All coefficients set, i.e. [`Element::one`]
    fn default() -> Self {
        Self::one()
    }
}

impl<const N: usize> ConstantTimeEq for Element<N> {
    fn ct_eq(&self, other: &Self) -> Choice {
        ct_eq_bits(&self.bits, &other.bits)
    }
}

impl<const N: usize> PartialEq for Element<N> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<const N: usize> Eq for Element<N> {}

impl<const N: usize> ConditionallySelectable for Element<N> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            bits: ct_select_bits(&a.bits, &b.bits, choice),
        }
    }
}

impl<const N: usize> Add for Element<N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Element::add(&self, &rhs)
    }
}

impl<const N: usize> Add<&Element<N>> for &Element<N> {
    type Output = Element<N>;

    fn add(self, rhs: &Element<N>) -> Element<N> {
        Element::add(self, rhs)
    }
}

impl<const N: usize> AddAssign for Element<N> {
    fn add_assign(&mut self, rhs: Self) {
        *self = Element::add(self, &rhs);
    }
}

impl<const N: usize> Zeroize for Element<N> {
    fn zeroize(&mut self) {
        self.bits.zeroize();
    }
}

impl<const N: usize> fmt::Display for Element<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl<const N: usize> fmt::Debug for Element<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Element<{}>({})", N, self.to_text())
    }
}

impl<const N: usize> FromStr for Element<N> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_text(s)
    }
}

impl<const N: usize> TextEncoding for Element<N> {
    const TEXT_LEN: usize = N;

    fn decode_text(text: &str) -> CoreResult<Self> {
        Self::from_text(text).map_err(CoreError::from)
    }

    fn encode_text(&self) -> String {
        self.to_text()
    }
}
