#![deny(missing_docs)]

//! # Route Grouper
//!
//! Partitions the extracted route sequence by canonical group key. Groups
//! are kept in first-seen order (the emission order for directory creation)
//! and members stay in extraction order within each group.

use crate::extract::{HttpMethod, Route};
use crate::normalize::canonical_key;
use indexmap::{IndexMap, IndexSet};

/// A cluster of routes sharing one canonical path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteGroup {
    /// The canonical group key all members normalize to.
    pub canonical_path: String,
    /// Union of member methods, in first-declared order.
    pub methods: IndexSet<HttpMethod>,
    /// Member routes in extraction order.
    pub members: Vec<Route>,
}

impl RouteGroup {
    fn new(canonical_path: String) -> Self {
        RouteGroup {
            canonical_path,
            methods: IndexSet::new(),
            members: Vec::new(),
        }
    }

    /// The original full path the group was derived from (first member).
    pub fn source_path(&self) -> &str {
        self.members
            .first()
            .map(|route| route.path.as_str())
            .unwrap_or_default()
    }

    /// The original full path to use for table lookup when dispatching a
    /// given method: the path of the first member declaring that method.
    ///
    /// Members grouped under one key may carry differently named parameters;
    /// resolving the lookup path per method keeps dispatch aligned with what
    /// the original application actually registered.
    pub fn lookup_path(&self, method: HttpMethod) -> &str {
        self.members
            .iter()
            .find(|route| route.method == method)
            .map(|route| route.path.as_str())
            .unwrap_or_else(|| self.source_path())
    }
}

/// Consumes the full route sequence and produces the canonical-key ->
/// group mapping, preserving declaration order throughout.
pub fn group_routes(routes: &[Route]) -> IndexMap<String, RouteGroup> {
    let mut groups: IndexMap<String, RouteGroup> = IndexMap::new();

    for route in routes {
        let key = canonical_key(&route.path);
        let group = groups
            .entry(key.clone())
            .or_insert_with(|| RouteGroup::new(key));
        group.methods.insert(route.method);
        group.members.push(route.clone());
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract_routes;
    use pretty_assertions::assert_eq;

    fn routes(source: &str) -> Vec<Route> {
        extract_routes(source)
    }

    #[test]
    fn test_methods_union_per_group() {
        let rs = routes(
            r#"
            app.get("/api/workers", h);
            app.post("/api/workers", h);
        "#,
        );
        let groups = group_routes(&rs);
        assert_eq!(groups.len(), 1);
        let group = &groups["workers"];
        assert_eq!(group.canonical_path, "workers");
        let methods: Vec<_> = group.methods.iter().copied().collect();
        assert_eq!(methods, vec![HttpMethod::Get, HttpMethod::Post]);
    }

    #[test]
    fn test_differently_named_params_share_a_group() {
        let rs = routes(
            r#"
            app.get("/api/workers/:id", h);
            app.put("/api/workers/:workerId", h);
        "#,
        );
        let groups = group_routes(&rs);
        assert_eq!(groups.len(), 1);
        let group = &groups["workers/[id]"];
        assert_eq!(group.members.len(), 2);
    }

    #[test]
    fn test_members_keep_extraction_order() {
        let rs = routes(
            r#"
            app.post("/api/projects", h);
            app.get("/api/projects", h);
            app.get("/api/projects/", h);
        "#,
        );
        let groups = group_routes(&rs);
        let group = &groups["projects"];
        let orders: Vec<_> = group.members.iter().map(|r| r.order).collect();
        assert_eq!(orders, vec![0, 1, 2]);
    }

    #[test]
    fn test_group_emission_order_is_first_seen() {
        let rs = routes(
            r#"
            app.get("/api/workers", h);
            app.get("/api/projects", h);
            app.post("/api/workers", h);
        "#,
        );
        let groups = group_routes(&rs);
        let keys: Vec<_> = groups.keys().cloned().collect();
        assert_eq!(keys, vec!["workers", "projects"]);
    }

    #[test]
    fn test_lookup_path_is_per_method() {
        let rs = routes(
            r#"
            app.get("/api/workers/:id", h);
            app.put("/api/workers/:workerId", h);
        "#,
        );
        let groups = group_routes(&rs);
        let group = &groups["workers/[id]"];
        assert_eq!(group.lookup_path(HttpMethod::Get), "/api/workers/:id");
        assert_eq!(group.lookup_path(HttpMethod::Put), "/api/workers/:workerId");
        // A method nobody declared falls back to the group source path.
        assert_eq!(group.lookup_path(HttpMethod::Delete), "/api/workers/:id");
    }
}
