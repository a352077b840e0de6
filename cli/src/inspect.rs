#![deny(missing_docs)]

//! # Inspect Command
//!
//! Prints the routes extracted from a declaration source together with the
//! canonical group key and the destination path each one maps to. Useful
//! for checking what a generation run would produce without writing files.

use crate::error::{CliError, CliResult};
use jisr_core::{canonical_key, destination_path, extract_routes, group_routes, AppError};
use std::fs;
use std::path::PathBuf;

/// Arguments for the inspect command.
#[derive(clap::Args, Debug, Clone)]
pub struct InspectArgs {
    /// Path to the route-declaration source file.
    #[clap(long, default_value = "core/src/domain/routes.rs")]
    pub routes_path: PathBuf,
}

/// Executes the inspection.
pub fn execute(args: &InspectArgs) -> CliResult<()> {
    let source = fs::read_to_string(&args.routes_path).map_err(|e| {
        CliError::Core(AppError::Extraction(format!(
            "cannot read route source {:?}: {}",
            args.routes_path, e
        )))
    })?;

    let routes = extract_routes(&source);
    println!("{} route declaration(s) in {:?}", routes.len(), args.routes_path);

    for route in &routes {
        println!(
            "  {:>3}  {:<6} {:<36} -> {}",
            route.order,
            route.method,
            route.path,
            destination_path(&route.path)
        );
    }

    let groups = group_routes(&routes);
    println!("{} group(s)", groups.len());
    for group in groups.values() {
        let methods: Vec<&str> = group.methods.iter().map(|m| m.as_str()).collect();
        println!("  {:<28} [{}]", group.canonical_path, methods.join(", "));
    }

    // Sanity check only; grouping and extraction share the same key logic.
    debug_assert!(routes
        .iter()
        .all(|route| groups.contains_key(&canonical_key(&route.path))));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_inspect_reads_and_reports() {
        let dir = tempdir().unwrap();
        let routes_path = dir.path().join("routes.rs");
        fs::write(
            &routes_path,
            r#"
            app.get("/api/projects", h);
            app.post("/api/projects", h);
        "#,
        )
        .unwrap();

        let args = InspectArgs { routes_path };
        assert!(execute(&args).is_ok());
    }

    #[test]
    fn test_inspect_missing_source_fails() {
        let dir = tempdir().unwrap();
        let args = InspectArgs { routes_path: dir.path().join("absent.rs") };
        assert!(execute(&args).is_err());
    }
}
