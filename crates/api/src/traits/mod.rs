//! Trait definitions implemented by nbfield types

pub mod text;

pub use text::TextEncoding;
