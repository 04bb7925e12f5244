//! scorm-inspect - inspect and validate SCORM packages from the command line

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("error: {:#}", e);
            std::process::exit(2);
        },
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    // RUST_LOG overrides the verbosity flag
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("scorm_core=debug")
        } else {
            EnvFilter::new("scorm_core=info")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let options = cli.package_options();
    match cli.command {
        Commands::Inspect(args) => commands::inspect::execute(args, &options),
        Commands::Validate(args) => commands::validate::execute(args, &options),
        Commands::Tracking(args) => commands::tracking::execute(args),
    }
}
