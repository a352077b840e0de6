#![deny(missing_docs)]

//! # Requests
//!
//! The narrow inbound view a destination framework adapter fills in, and
//! the synthetic request the borrowed handler receives.

use crate::extract::HttpMethod;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// The capability set the bridge needs from an inbound call: headers, raw
/// body bytes, query parameters and (when the destination framework
/// supplies them) path parameters.
///
/// One adapter per destination framework constructs this; the generated
/// units and tests construct it directly.
#[derive(Debug, Clone, Default)]
pub struct InboundRequest {
    /// Inbound header map.
    pub headers: HashMap<String, String>,
    /// Raw request payload bytes.
    pub body: Vec<u8>,
    /// Decoded query parameters.
    pub query: HashMap<String, String>,
    /// Path parameters, when the destination framework extracts them.
    pub params: HashMap<String, String>,
}

impl InboundRequest {
    /// Creates an empty inbound request.
    pub fn new() -> Self {
        InboundRequest::default()
    }

    /// Sets the raw payload to a serialized JSON value.
    pub fn with_json_body(mut self, body: &Value) -> Self {
        self.body = body.to_string().into_bytes();
        self
    }

    /// Sets the raw payload bytes verbatim.
    pub fn with_raw_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Adds a header.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_string(), value.to_string());
        self
    }

    /// Adds a query parameter.
    pub fn with_query(mut self, name: &str, value: &str) -> Self {
        self.query.insert(name.to_string(), value.to_string());
        self
    }

    /// Adds a path parameter.
    pub fn with_param(mut self, name: &str, value: &str) -> Self {
        self.params.insert(name.to_string(), value.to_string());
        self
    }
}

/// In-memory stand-in for the original framework's request type, owned
/// exclusively by one in-flight bridged call.
#[derive(Debug, Clone)]
pub struct SyntheticRequest {
    /// Method of the adapter unit that received the call.
    pub method: HttpMethod,
    /// The original full path used for route-table lookup.
    pub url: String,
    /// Headers copied from the inbound request.
    pub headers: HashMap<String, String>,
    /// Parsed JSON payload. Empty object for GET and for malformed input.
    pub body: Value,
    /// Path parameters, populated only when the destination supplied them.
    pub params: HashMap<String, String>,
    /// Query parameters copied from the inbound request.
    pub query: HashMap<String, String>,
}

impl SyntheticRequest {
    pub(crate) fn from_inbound(method: HttpMethod, path: &str, inbound: InboundRequest) -> Self {
        let body = if method == HttpMethod::Get {
            Value::Object(Map::new())
        } else {
            serde_json::from_slice(&inbound.body).unwrap_or_else(|_| Value::Object(Map::new()))
        };

        SyntheticRequest {
            method,
            url: path.to_string(),
            headers: inbound.headers,
            body,
            params: inbound.params,
            query: inbound.query,
        }
    }

    /// Looks up a path parameter.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Looks up a query parameter.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(String::as_str)
    }
}
