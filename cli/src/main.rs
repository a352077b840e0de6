#![deny(missing_docs)]

//! # Jisr CLI
//!
//! Command Line Interface for the route-bridge toolchain.
//!
//! Supported Commands:
//! - `generate`: Extracts the declared routes and emits file-based adapter units.
//! - `inspect`: Prints the extracted route table and its grouping.

use clap::{Parser, Subcommand};
use jisr_core::FileRouterStrategy;

use crate::error::CliResult;

mod error;
mod generate;
mod inspect;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Route bridge toolchain CLI")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate adapter route files from the route-declaration source.
    Generate(generate::GenerateArgs),
    /// List the routes extracted from the route-declaration source.
    Inspect(inspect::InspectArgs),
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Generate(args) => {
            // Injecting the file-router output convention
            let strategy = FileRouterStrategy;
            generate::execute(args, &strategy)?;
        }
        Commands::Inspect(args) => {
            inspect::execute(args)?;
        }
    }

    Ok(())
}
