//! `scorm-inspect validate` command

use anyhow::Result;
use scorm_core::PackageOptions;
use serde_json::json;

use super::load_package;
use crate::cli::ValidateArgs;

pub fn execute(args: ValidateArgs, options: &PackageOptions) -> Result<i32> {
    let package = load_package(&args.package, options)?;
    let report = package.validate();

    let output = json!({
        "valid": report.valid,
        "errors": report.errors,
        "warnings": report.warnings,
        "summary": package.summary(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    for warning in &report.warnings {
        tracing::warn!("{}", warning);
    }
    if report.valid {
        Ok(0)
    } else {
        for error in &report.errors {
            tracing::error!("{}", error);
        }
        Ok(1)
    }
}
