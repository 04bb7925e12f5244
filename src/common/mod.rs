//! Common types and utilities shared across the crate.

pub mod bom;
pub mod error;

pub use error::{Error, Result};
