#![deny(missing_docs)]

//! # Target Strategy Trait
//!
//! Defines the interface required to emit adapter units for a specific
//! destination routing convention (file layout, unit shape, imports).

use crate::extract::HttpMethod;
use crate::group::RouteGroup;
use std::path::PathBuf;

/// A strategy trait for decoupling destination-convention code emission.
///
/// Implementors define where a group's adapter file lives and what each
/// handler unit looks like.
pub trait TargetStrategy {
    /// Returns the file header (comment banner plus imports) for a group's
    /// generated unit file.
    fn unit_header(&self, group: &RouteGroup) -> String;

    /// Returns one handler unit for a single method of the group.
    ///
    /// # Arguments
    ///
    /// * `group` - The route group the unit belongs to.
    /// * `method` - The HTTP method this unit serves.
    /// * `lookup_path` - The original full path the unit passes to the
    ///   bridge for route-table lookup.
    fn unit_fn(&self, group: &RouteGroup, method: HttpMethod, lookup_path: &str) -> String;

    /// Returns the relative output path for a group's generated unit file,
    /// mirroring the canonical group key.
    fn unit_file_path(&self, group: &RouteGroup) -> PathBuf;
}
