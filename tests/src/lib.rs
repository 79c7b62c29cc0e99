//! Reference vectors and shared fixtures for the nbfield test suites
pub mod vectors;
