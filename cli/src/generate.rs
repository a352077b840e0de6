#![deny(missing_docs)]

//! # Generate Command
//!
//! Runs the extractor -> grouper -> synthesizer pipeline and writes one
//! adapter unit file per route group, mirroring the canonical group key in
//! the output directory layout.
//!
//! Existing output files are never overwritten: regeneration only fills in
//! the groups that have no file yet, so local edits survive.

use crate::error::{CliError, CliResult};
use jisr_core::{extract_routes, generate_unit_file, group_routes, AppError, TargetStrategy};
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate command.
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Path to the route-declaration source file.
    #[clap(long, default_value = "core/src/domain/routes.rs")]
    pub routes_path: PathBuf,

    /// Output directory for the generated adapter route files.
    #[clap(long, default_value = "generated/api")]
    pub output_dir: PathBuf,
}

/// Executes the generation run.
///
/// # Arguments
///
/// * `args` - Command arguments including paths.
/// * `strategy` - The output convention used for emission.
pub fn execute(args: &GenerateArgs, strategy: &impl TargetStrategy) -> CliResult<()> {
    // A missing declaration source is fatal for the whole run.
    let source = fs::read_to_string(&args.routes_path).map_err(|e| {
        CliError::Core(AppError::Extraction(format!(
            "cannot read route source {:?}: {}",
            args.routes_path, e
        )))
    })?;

    let routes = extract_routes(&source);
    println!("Found {} route declaration(s)", routes.len());
    if routes.is_empty() {
        println!("Nothing to generate.");
        return Ok(());
    }

    let groups = group_routes(&routes);
    fs::create_dir_all(&args.output_dir)?;

    let mut written = 0usize;
    let mut skipped = 0usize;

    for group in groups.values() {
        let relative = strategy.unit_file_path(group);
        let file_path = args.output_dir.join(&relative);

        if file_path.exists() {
            skipped += 1;
            continue;
        }

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let code = generate_unit_file(group, strategy);
        fs::write(&file_path, code)?;

        println!(
            "  -> {} ({} method(s))",
            relative.display(),
            group.methods.len()
        );
        written += 1;
    }

    println!("Generated {} adapter file(s), skipped {} existing.", written, skipped);

    Ok(())
}
