//! Fixed-width textual encoding of field elements.

use crate::Result;

/// A type with a fixed-width `'0'`/`'1'` text form, most significant coefficient first.
pub trait TextEncoding: Sized {
    /// Number of characters produced by [`TextEncoding::encode_text`].
    const TEXT_LEN: usize;

    /// Decode a string of at most `TEXT_LEN` characters.
    ///
    /// Shorter strings are right-aligned; the missing leading positions are zero.
    fn decode_text(text: &str) -> Result<Self>;

    /// Encode as exactly `TEXT_LEN` characters.
    fn encode_text(&self) -> String;
}
