#![deny(missing_docs)]

//! # Path Normalizer
//!
//! Maps source-syntax paths (`:param` segments, `/api/` prefix) onto the
//! destination file-routing syntax (`[param]` segments), and onto the
//! canonical group key in which every parameter segment collapses to the
//! same `[id]` marker so structurally identical routes cluster together.

/// Reserved canonical key for paths that are empty after prefix stripping.
pub const INDEX_KEY: &str = "index";

/// The generic marker all parameter segments collapse to in a group key.
pub const PARAM_MARKER: &str = "[id]";

/// Catch-all token a trailing wildcard maps to.
pub const CATCH_ALL: &str = "[...slug]";

/// Strips the `/api` prefix, collapses duplicate slashes and removes the
/// trailing slash, returning the remaining segments.
fn clean_segments(path: &str) -> Vec<&str> {
    // Only a whole `/api` segment counts as the prefix.
    let trimmed = match path.strip_prefix("/api") {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => path,
    };

    trimmed
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect()
}

fn map_segments(path: &str, rename: impl Fn(&str) -> String) -> String {
    let mut out: Vec<String> = Vec::new();
    for segment in clean_segments(path) {
        if segment.contains('*') {
            // A wildcard swallows the rest of the path.
            out.push(CATCH_ALL.to_string());
            break;
        }
        match segment.strip_prefix(':') {
            Some(name) => out.push(rename(name)),
            None => out.push(segment.to_string()),
        }
    }
    out.join("/")
}

/// Converts a source path to the destination routing syntax, keeping the
/// original parameter names: `/api/workers/:workerId` -> `workers/[workerId]`.
///
/// The transform is idempotent: a path already in destination syntax maps to
/// itself.
pub fn destination_path(path: &str) -> String {
    map_segments(path, |name| format!("[{}]", name))
}

/// Computes the canonical group key for a source path.
///
/// Same transform as [`destination_path`], except every parameter segment
/// collapses to the [`PARAM_MARKER`] regardless of its declared name, so
/// `/workers/:id` and `/workers/:workerId` share one key. A path that is
/// empty after stripping the `/api` prefix maps to [`INDEX_KEY`].
pub fn canonical_key(path: &str) -> String {
    let key = map_segments(path, |_| PARAM_MARKER.to_string());
    if key.is_empty() {
        INDEX_KEY.to_string()
    } else {
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_destination_keeps_parameter_names() {
        assert_eq!(destination_path("/api/workers/:workerId"), "workers/[workerId]");
        assert_eq!(destination_path("/api/projects/:id/stats"), "projects/[id]/stats");
    }

    #[test]
    fn test_destination_is_idempotent() {
        let once = destination_path("/api/workers/:id");
        assert_eq!(destination_path(&once), once);
    }

    #[test]
    fn test_canonical_collapses_parameter_names() {
        assert_eq!(canonical_key("/api/workers/:id"), "workers/[id]");
        assert_eq!(
            canonical_key("/api/workers/:workerId"),
            canonical_key("/api/workers/:id")
        );
    }

    #[test]
    fn test_static_paths_map_unchanged() {
        assert_eq!(canonical_key("/api/projects"), "projects");
        assert_eq!(destination_path("/api/projects"), "projects");
    }

    #[test]
    fn test_empty_after_prefix_is_index() {
        assert_eq!(canonical_key("/api/"), INDEX_KEY);
        assert_eq!(canonical_key("/api"), INDEX_KEY);
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        assert_eq!(canonical_key("/api/projects/"), "projects");
    }

    #[test]
    fn test_duplicate_slashes_collapse() {
        assert_eq!(canonical_key("/api//projects//:id"), "projects/[id]");
    }

    #[test]
    fn test_prefix_must_be_a_whole_segment() {
        assert_eq!(canonical_key("/apikeys"), "apikeys");
    }

    #[test]
    fn test_trailing_wildcard_becomes_catch_all() {
        assert_eq!(destination_path("/api/mobile*"), CATCH_ALL);
        assert_eq!(canonical_key("/api/files/*path"), format!("files/{}", CATCH_ALL));
    }
}
