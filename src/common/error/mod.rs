//! Unified error types for scorm-core.
//!
//! Every fatal condition raised while reading a package surfaces through the
//! single [`Error`] type. Validation problems are not errors; they are
//! reported through [`crate::manifest::ValidationResult`].

// Submodule declarations
pub mod types;
pub mod conversions;

// Re-exports
pub use types::{Error, Result};
