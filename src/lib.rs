//! # nbfield
//!
//! Arithmetic in GF(2^233) over a type II optimal normal basis.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! nbfield = "0.3"
//! ```
//!
//! ```
//! use nbfield::prelude::*;
//!
//! let field = Onb233Field::new()?;
//! let a = Onb233Element::from_text("1101")?;
//! let b = a.square();
//! assert_eq!(field.mul(&a, &a), b);
//! assert_eq!(field.pow(&a, &exponent_from_text("10")), b);
//! # Ok::<(), nbfield::algorithms::Error>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): Standard library support
//! - `serde`: Serialize elements as their fixed-width text encoding
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`nbfield-api`]: Public error type and traits
//! - [`nbfield-algorithms`]: Multiplication table, field elements and field context
//! - [`nbfield-params`]: Field parameters
//! - [`nbfield-common`]: Number-theoretic helpers
//! - [`nbfield-internal`]: Constant-time helpers

// Core re-exports (always available)
pub use nbfield_algorithms as algorithms;
pub use nbfield_api as api;
pub use nbfield_common as common;
pub use nbfield_internal as internal;
pub use nbfield_params as params;

/// Common imports for nbfield users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::error::ResultExt;
    pub use crate::api::TextEncoding;

    // Re-export field types
    pub use crate::algorithms::{
        exponent_from_text, Element, MultiplicationTable, NormalBasisField, Onb233Element,
        Onb233Field, Onb233Table,
    };

    // Re-export parameters
    pub use crate::params::{ONB233_DEGREE, ONB233_GAUSS_PRIME, ONB233_TEXT_LEN};
}
