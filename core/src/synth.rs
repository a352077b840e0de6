#![deny(missing_docs)]

//! # Adapter Synthesizer
//!
//! Assembles one generated source file per route group: the strategy's
//! header followed by exactly one handler unit per method in the group's
//! method set, in first-declared order.

use crate::group::RouteGroup;
use crate::strategies::TargetStrategy;

/// Generates the full source of a group's adapter unit file.
///
/// The group's method set already collapses duplicate declarations, so no
/// duplicate unit is emitted for the same (group, method) pair.
pub fn generate_unit_file(group: &RouteGroup, strategy: &impl TargetStrategy) -> String {
    let mut code = strategy.unit_header(group);
    for method in group.methods.iter().copied() {
        let lookup_path = group.lookup_path(method);
        code.push_str(&strategy.unit_fn(group, method, lookup_path));
    }
    code
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract_routes;
    use crate::group::group_routes;
    use crate::strategies::FileRouterStrategy;

    fn generate(source: &str) -> String {
        let routes = extract_routes(source);
        let groups = group_routes(&routes);
        assert_eq!(groups.len(), 1);
        let group = groups.values().next().unwrap();
        generate_unit_file(group, &FileRouterStrategy)
    }

    #[test]
    fn test_one_unit_per_method() {
        let code = generate(
            r#"
            app.get("/api/workers", h);
            app.post("/api/workers", h);
        "#,
        );
        assert_eq!(code.matches("pub async fn get(").count(), 1);
        assert_eq!(code.matches("pub async fn post(").count(), 1);
    }

    #[test]
    fn test_redeclared_method_emits_single_unit() {
        let code = generate(
            r#"
            app.get("/api/workers", a);
            app.get("/api/workers", b);
        "#,
        );
        assert_eq!(code.matches("pub async fn get(").count(), 1);
    }

    #[test]
    fn test_units_use_original_lookup_paths() {
        let code = generate(
            r#"
            app.get("/api/workers/:id", h);
            app.put("/api/workers/:workerId", h);
        "#,
        );
        assert!(code.contains("HttpMethod::Get, \"/api/workers/:id\""));
        assert!(code.contains("HttpMethod::Put, \"/api/workers/:workerId\""));
    }
}
