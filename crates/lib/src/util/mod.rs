//! Shared utilities.
//!
//! Serialization helpers used by the report types, plus test helpers.

pub mod display;

#[cfg(test)]
pub mod testutil;
