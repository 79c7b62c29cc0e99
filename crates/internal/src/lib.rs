//! Internal utilities for the nbfield library
//!
//! Not part of the public API; shared by the member crates only.

pub mod constant_time;
