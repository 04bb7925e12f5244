//! scorm-core - SCORM package ingestion and CMI runtime data translation
//!
//! This library reads SCORM 1.2 and SCORM 2004 content packages and the
//! runtime data their content reports back to a learning platform.
//!
//! # Features
//!
//! - **Manifest parsing**: Normalize `imsmanifest.xml` into a typed model
//! - **Version detection**: Distinguish SCORM 1.2 from SCORM 2004 packages
//! - **SCO extraction**: Find the launchable units of the first organization
//! - **Validation**: Report structural errors and warnings as values
//! - **CMI translation**: Turn loosely shaped runtime payloads into tracking records
//!
//! # Example - Reading a package
//!
//! ```no_run
//! use scorm_core::ScormPackage;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let data = std::fs::read("course.zip")?;
//! let package = ScormPackage::from_bytes(&data)?;
//!
//! println!("Course: {}", package.manifest.title);
//! println!("Organization: {}", package.organization_identifier);
//! for sco in &package.scos {
//!     println!("SCO {}: {}", sco.identifier, sco.launch_url);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Validating a package
//!
//! ```no_run
//! use scorm_core::ScormPackage;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let data = std::fs::read("course.zip")?;
//! let report = ScormPackage::from_bytes(&data)?.validate();
//!
//! for error in &report.errors {
//!     eprintln!("error: {}", error);
//! }
//! for warning in &report.warnings {
//!     eprintln!("warning: {}", warning);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Translating runtime data
//!
//! ```rust
//! use scorm_core::cmi::{CompletionStatus, SuccessStatus, TrackingUpdate};
//!
//! let payload = serde_json::json!({
//!     "lesson_status": "passed",
//!     "score": { "raw": 88, "max": 100 },
//!     "time": { "session_time": "00:20:00" }
//! });
//! let update = TrackingUpdate::from_payload(&payload);
//!
//! assert_eq!(update.completion_status, Some(CompletionStatus::Completed));
//! assert_eq!(update.success_status, Some(SuccessStatus::Passed));
//! assert_eq!(update.session_time, Some(1200));
//! ```

/// CMI runtime data model and tracking projection
pub mod cmi;

/// Common types, errors and text decoding
pub mod common;

/// Manifest model, builder, version detection and validation
pub mod manifest;

/// Package archives, options and SCO extraction
pub mod package;

/// Normalized XML tree
pub mod xml;

pub use common::{Error, Result};
pub use manifest::{Manifest, ScormVersion, ValidationResult};
pub use package::{PackageOptions, PackageSummary, ScormPackage, Sco, parse_package};
