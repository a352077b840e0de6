#![deny(missing_docs)]

//! # File Router Strategy
//!
//! Emits adapter units for the bracketed file-based routing layout: one
//! directory per canonical path segment, one `route.rs` per group, one
//! `pub async fn <method>` per declared verb. Each unit delegates to the
//! bridge runtime with the literal path the original application registered.

use crate::extract::HttpMethod;
use crate::group::RouteGroup;
use crate::normalize::{destination_path, INDEX_KEY};
use crate::strategies::TargetStrategy;
use std::path::PathBuf;

/// Strategy emitting `route.rs` units wired to the bridge runtime.
pub struct FileRouterStrategy;

impl TargetStrategy for FileRouterStrategy {
    fn unit_header(&self, group: &RouteGroup) -> String {
        format!(
            "// Auto-generated adapter route for {}.\n\
             // Destination path: {}\n\
             // Regeneration skips existing files; delete this file to regenerate it.\n\
             \n\
             use jisr_core::bridge::{{self, BridgeResponse, InboundRequest}};\n\
             use jisr_core::extract::HttpMethod;\n",
            group.source_path(),
            destination_path(group.source_path()),
        )
    }

    fn unit_fn(&self, _group: &RouteGroup, method: HttpMethod, lookup_path: &str) -> String {
        format!(
            "\npub async fn {}(inbound: InboundRequest) -> BridgeResponse {{\n    \
             bridge::shared()\n        \
             .dispatch(HttpMethod::{}, \"{}\", inbound)\n        \
             .await\n\
             }}\n",
            method.handler_name(),
            method.variant_name(),
            lookup_path,
        )
    }

    fn unit_file_path(&self, group: &RouteGroup) -> PathBuf {
        let mut path = PathBuf::new();
        if group.canonical_path == INDEX_KEY {
            path.push(INDEX_KEY);
        } else {
            for segment in group.canonical_path.split('/') {
                path.push(segment);
            }
        }
        path.push("route.rs");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract_routes;
    use crate::group::group_routes;

    fn single_group(source: &str) -> RouteGroup {
        let routes = extract_routes(source);
        let groups = group_routes(&routes);
        assert_eq!(groups.len(), 1);
        groups.into_iter().next().map(|(_, g)| g).unwrap()
    }

    #[test]
    fn test_unit_fn_targets_the_bridge() {
        let group = single_group(r#"app.get("/api/projects", h);"#);
        let strategy = FileRouterStrategy;
        let code = strategy.unit_fn(&group, HttpMethod::Get, "/api/projects");
        assert!(code.contains("pub async fn get(inbound: InboundRequest) -> BridgeResponse {"));
        assert!(code.contains(".dispatch(HttpMethod::Get, \"/api/projects\", inbound)"));
    }

    #[test]
    fn test_header_names_source_and_destination() {
        let group = single_group(r#"app.put("/api/workers/:workerId", h);"#);
        let strategy = FileRouterStrategy;
        let header = strategy.unit_header(&group);
        assert!(header.contains("/api/workers/:workerId"));
        assert!(header.contains("workers/[workerId]"));
        assert!(header.contains("use jisr_core::bridge"));
    }

    #[test]
    fn test_file_path_mirrors_canonical_key() {
        let group = single_group(r#"app.get("/api/workers/:id", h);"#);
        let strategy = FileRouterStrategy;
        let path = strategy.unit_file_path(&group);
        assert_eq!(path, PathBuf::from("workers/[id]/route.rs"));
    }

    #[test]
    fn test_root_group_lands_in_index() {
        let group = single_group(r#"app.get("/api/", h);"#);
        let strategy = FileRouterStrategy;
        assert_eq!(strategy.unit_file_path(&group), PathBuf::from("index/route.rs"));
    }
}
