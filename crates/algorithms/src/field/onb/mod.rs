//! Type II optimal normal basis arithmetic
//!
//! [`MultiplicationTable`] is derived once per degree and owned by a
//! [`NormalBasisField`], which threads it into every multiplication. Everything that
//! does not multiply (addition, squaring, encoding) lives on [`Element`] directly.
//!
//! ```
//! use nbfield_algorithms::field::onb::{Onb233Element, Onb233Field};
//!
//! let field = Onb233Field::new().unwrap();
//! let a = Onb233Element::from_text("1011").unwrap();
//! assert_eq!(field.mul(&a, &field.one()), a);
//! assert_eq!(field.mul(&a, &a), a.square());
//! ```

mod element;
#[cfg(feature = "serde")]
mod serialization;
mod table;

pub use element::{exponent_from_text, Element};
pub use table::MultiplicationTable;

use log::trace;
use nbfield_params::ONB233_DEGREE;

use crate::error::Result;

/// GF(2^233) element
pub type Onb233Element = Element<ONB233_DEGREE>;

/// GF(2^233) multiplication table
pub type Onb233Table = MultiplicationTable<ONB233_DEGREE>;

/// GF(2^233) arithmetic context
pub type Onb233Field = NormalBasisField<ONB233_DEGREE>;

/// GF(2^N) with its multiplication table built once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalBasisField<const N: usize> {
    table: MultiplicationTable<N>,
}

impl<const N: usize> NormalBasisField<N> {
    /// Build the multiplication table for degree `N`
    pub fn new() -> Result<Self> {
        let table = MultiplicationTable::build()?;
        trace!("normal basis field GF(2^{}) ready", N);
        Ok(Self { table })
    }

    /// Wrap an already built table
    pub fn from_table(table: MultiplicationTable<N>) -> Self {
        Self { table }
    }

    /// The shared multiplication table
    pub fn table(&self) -> &MultiplicationTable<N> {
        &self.table
    }

    /// Extension degree N
    pub const fn degree(&self) -> usize {
        N
    }

    /// Additive identity
    pub fn zero(&self) -> Element<N> {
        Element::zero()
    }

    /// Multiplicative identity
    pub fn one(&self) -> Element<N> {
        Element::one()
    }

    /// `a + b`
    pub fn add(&self, a: &Element<N>, b: &Element<N>) -> Element<N> {
        a.add(b)
    }

    /// `a * b`
    pub fn mul(&self, a: &Element<N>, b: &Element<N>) -> Element<N> {
        a.mul(b, &self.table)
    }

    /// `a^2`
    pub fn square(&self, a: &Element<N>) -> Element<N> {
        a.square()
    }

    /// `a^e` with `e` given most significant bit first
    pub fn pow(&self, a: &Element<N>, exponent: &[bool]) -> Element<N> {
        a.pow(exponent, &self.table)
    }

    /// `a^-1`; fails for zero
    pub fn invert(&self, a: &Element<N>) -> Result<Element<N>> {
        a.invert(&self.table)
    }
}
