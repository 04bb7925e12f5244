//! `scorm-inspect inspect` command

use anyhow::Result;
use scorm_core::PackageOptions;

use super::load_package;
use crate::cli::InspectArgs;

pub fn execute(args: InspectArgs, options: &PackageOptions) -> Result<i32> {
    let package = load_package(&args.package, options)?;

    if args.summary {
        println!(
            "{} (SCORM {}, organization {})",
            package.manifest.title, package.version, package.organization_identifier
        );
        for sco in &package.scos {
            println!(
                "  [{:>3}] {} - {} -> {}",
                sco.order_index, sco.identifier, sco.title, sco.launch_url
            );
        }
    } else {
        println!("{}", serde_json::to_string_pretty(&package)?);
    }

    Ok(0)
}
