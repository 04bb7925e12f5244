//! Command implementations.

pub mod inspect;
pub mod tracking;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};
use scorm_core::{PackageOptions, ScormPackage};

/// Read and parse a package file.
pub fn load_package(path: &Path, options: &PackageOptions) -> Result<ScormPackage> {
    let data = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    ScormPackage::from_bytes_with_options(&data, options)
        .with_context(|| format!("failed to parse SCORM package {}", path.display()))
}
