#![deny(missing_docs)]

//! # Route Extractor
//!
//! Scans the text of a route-declaration source and produces the declared
//! routes in declaration order.
//!
//! Matching is textual, not structural: a route is recognized wherever the
//! source contains a call of the shape `<recv>.<verb>("<path>"` with a
//! single- or double-quoted literal path. Dynamically constructed paths do
//! not match the literal group and are skipped silently.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

/// HTTP verbs recognized by the extractor and the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HttpMethod {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// PATCH
    Patch,
    /// DELETE
    Delete,
}

impl HttpMethod {
    /// Uppercase wire name, e.g. `GET`.
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Lowercase name used for generated handler functions, e.g. `get`.
    pub fn handler_name(self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Patch => "patch",
            HttpMethod::Delete => "delete",
        }
    }

    /// Rust enum variant ident used by the synthesizer, e.g. `Get`.
    pub fn variant_name(self) -> &'static str {
        match self {
            HttpMethod::Get => "Get",
            HttpMethod::Post => "Post",
            HttpMethod::Put => "Put",
            HttpMethod::Patch => "Patch",
            HttpMethod::Delete => "Delete",
        }
    }

    /// Parses a verb keyword case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "get" => Some(HttpMethod::Get),
            "post" => Some(HttpMethod::Post),
            "put" => Some(HttpMethod::Put),
            "patch" => Some(HttpMethod::Patch),
            "delete" => Some(HttpMethod::Delete),
            _ => None,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A single extracted route declaration.
///
/// Immutable after extraction; `path` keeps the source syntax (`:param`
/// segments, `/api/` prefix) untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    /// Declared HTTP verb, case-normalized.
    pub method: HttpMethod,
    /// Declared path literal, verbatim.
    pub path: String,
    /// Zero-based declaration order within the source.
    pub order: usize,
}

fn route_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"\b\w+\.(?i:(get|post|put|delete|patch))\s*\(\s*["']([^"']+)["']"#)
            .expect("Invalid regex")
    })
}

/// Extracts every declared route from a route-declaration source, in
/// declaration order.
///
/// No deduplication happens here; order and repetition are preserved so the
/// grouper can resolve redeclarations.
pub fn extract_routes(source: &str) -> Vec<Route> {
    route_pattern()
        .captures_iter(source)
        .filter_map(|caps| {
            let method = HttpMethod::parse(caps.get(1)?.as_str())?;
            let path = caps.get(2)?.as_str().to_string();
            Some((method, path))
        })
        .enumerate()
        .map(|(order, (method, path))| Route { method, path, order })
        .collect()
}
