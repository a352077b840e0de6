#![deny(missing_docs)]

//! # Jisr Core
//!
//! Core library for the route-bridge toolchain: translates inline route
//! declarations (`app.get("/api/projects", ...)`) into a file-based routing
//! layout, and hosts the runtime bridge that lets the generated adapter
//! units invoke handlers registered against the original application.

/// Shared error types.
pub mod error;

/// Route extraction from declaration sources.
pub mod extract;

/// Path normalization between routing conventions.
pub mod normalize;

/// Grouping of extracted routes by canonical path.
pub mod group;

/// Adapter unit synthesis.
pub mod synth;

/// Strategy pattern interfaces for output conventions.
pub mod strategies;

/// Request-time bridge runtime.
pub mod bridge;

/// Domain services, storage port and route registration.
pub mod domain;

pub use error::{AppError, AppResult};
pub use extract::{extract_routes, HttpMethod, Route};
pub use group::{group_routes, RouteGroup};
pub use normalize::{canonical_key, destination_path};
pub use strategies::{FileRouterStrategy, TargetStrategy};
pub use synth::generate_unit_file;
