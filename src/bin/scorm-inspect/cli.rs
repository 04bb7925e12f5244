//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use scorm_core::PackageOptions;
use scorm_core::package::MANIFEST_ENTRY;

/// scorm-inspect - Inspect SCORM 1.2 / 2004 packages and runtime data
#[derive(Parser)]
#[command(name = "scorm-inspect")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Archive entry holding the manifest
    #[arg(long, global = true, default_value = MANIFEST_ENTRY)]
    pub manifest_entry: String,

    /// Accept SCOs whose launch file is missing from the archive
    #[arg(long, global = true)]
    pub no_verify_launch: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the parsed package as JSON
    Inspect(InspectArgs),

    /// Validate a package; exits with status 1 when it is invalid
    Validate(ValidateArgs),

    /// Print the tracking update derived from a CMI payload
    Tracking(TrackingArgs),
}

#[derive(Args)]
pub struct InspectArgs {
    /// Path to the package ZIP
    pub package: PathBuf,

    /// Print a one-line summary per SCO instead of JSON
    #[arg(long)]
    pub summary: bool,
}

#[derive(Args)]
pub struct ValidateArgs {
    /// Path to the package ZIP
    pub package: PathBuf,
}

#[derive(Args)]
pub struct TrackingArgs {
    /// JSON file with the CMI payload, or `-` for stdin
    pub payload: String,
}

impl Cli {
    pub fn package_options(&self) -> PackageOptions {
        PackageOptions::new()
            .with_manifest_entry(self.manifest_entry.clone())
            .with_verify_launch_files(!self.no_verify_launch)
    }
}
