#![deny(missing_docs)]

//! # Original Application
//!
//! The inline-routing application the bridge borrows handlers from: an
//! ordered route table built through express-style registration calls,
//! finalized into a read-only router with a `(method, path)` index.

use crate::bridge::request::SyntheticRequest;
use crate::bridge::response::SyntheticResponse;
use crate::extract::HttpMethod;
use futures::future::BoxFuture;
use std::collections::HashMap;
use std::sync::Arc;

/// Error a borrowed handler may surface to the dispatcher.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Boxed handler function stored in a route entry's chain.
pub type Handler = Arc<
    dyn Fn(SyntheticRequest, SyntheticResponse, Next) -> BoxFuture<'static, Result<(), HandlerError>>
        + Send
        + Sync,
>;

/// Pass-through continuation handed to a borrowed handler. Calling it
/// resolves the dispatch without a response.
pub struct Next {
    response: SyntheticResponse,
}

impl Next {
    pub(crate) fn new(response: SyntheticResponse) -> Self {
        Next { response }
    }

    /// Signals that the handler finished without writing a response.
    pub fn call(self) {
        self.response.fall_through();
    }
}

/// One registered route: literal path, allowed methods, handler chain.
pub struct RouteEntry {
    /// The literal path as registered.
    pub path: String,
    /// Methods this entry serves.
    pub methods: Vec<HttpMethod>,
    /// Ordered handler chain; the bridge invokes the first handler.
    pub handlers: Vec<Handler>,
}

/// Registration-time application. Entries keep registration order.
#[derive(Default)]
pub struct App {
    entries: Vec<RouteEntry>,
}

impl App {
    /// Creates an empty application.
    pub fn new() -> Self {
        App::default()
    }

    /// Registers a handler for an arbitrary method.
    pub fn route<F>(&mut self, method: HttpMethod, path: &str, handler: F) -> &mut Self
    where
        F: Fn(SyntheticRequest, SyntheticResponse, Next) -> BoxFuture<'static, Result<(), HandlerError>>
            + Send
            + Sync
            + 'static,
    {
        self.entries.push(RouteEntry {
            path: path.to_string(),
            methods: vec![method],
            handlers: vec![Arc::new(handler)],
        });
        self
    }

    /// Registers a GET handler.
    pub fn get<F>(&mut self, path: &str, handler: F) -> &mut Self
    where
        F: Fn(SyntheticRequest, SyntheticResponse, Next) -> BoxFuture<'static, Result<(), HandlerError>>
            + Send
            + Sync
            + 'static,
    {
        self.route(HttpMethod::Get, path, handler)
    }

    /// Registers a POST handler.
    pub fn post<F>(&mut self, path: &str, handler: F) -> &mut Self
    where
        F: Fn(SyntheticRequest, SyntheticResponse, Next) -> BoxFuture<'static, Result<(), HandlerError>>
            + Send
            + Sync
            + 'static,
    {
        self.route(HttpMethod::Post, path, handler)
    }

    /// Registers a PUT handler.
    pub fn put<F>(&mut self, path: &str, handler: F) -> &mut Self
    where
        F: Fn(SyntheticRequest, SyntheticResponse, Next) -> BoxFuture<'static, Result<(), HandlerError>>
            + Send
            + Sync
            + 'static,
    {
        self.route(HttpMethod::Put, path, handler)
    }

    /// Registers a PATCH handler.
    pub fn patch<F>(&mut self, path: &str, handler: F) -> &mut Self
    where
        F: Fn(SyntheticRequest, SyntheticResponse, Next) -> BoxFuture<'static, Result<(), HandlerError>>
            + Send
            + Sync
            + 'static,
    {
        self.route(HttpMethod::Patch, path, handler)
    }

    /// Registers a DELETE handler.
    pub fn delete<F>(&mut self, path: &str, handler: F) -> &mut Self
    where
        F: Fn(SyntheticRequest, SyntheticResponse, Next) -> BoxFuture<'static, Result<(), HandlerError>>
            + Send
            + Sync
            + 'static,
    {
        self.route(HttpMethod::Delete, path, handler)
    }

    /// The ordered route table.
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Finalizes the table into a read-only router, building the
    /// `(method, path)` index once. First-registered entries win duplicate
    /// keys, preserving the table's first-match semantics.
    pub fn finalize(self) -> Router {
        let mut index = HashMap::new();
        for (position, entry) in self.entries.iter().enumerate() {
            for method in &entry.methods {
                index.entry((*method, entry.path.clone())).or_insert(position);
            }
        }
        Router {
            entries: self.entries,
            index,
        }
    }
}

/// Read-only finalized route table with indexed lookup.
pub struct Router {
    entries: Vec<RouteEntry>,
    index: HashMap<(HttpMethod, String), usize>,
}

impl Router {
    /// Finds the first-registered entry serving `method` at the literal
    /// `path`, in O(1).
    pub fn find(&self, method: HttpMethod, path: &str) -> Option<&RouteEntry> {
        self.index
            .get(&(method, path.to_string()))
            .map(|position| &self.entries[*position])
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
