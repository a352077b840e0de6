#![deny(missing_docs)]

//! # Dispatch
//!
//! Runs one bridged invocation end to end: table lookup, synthetic
//! request/response construction, handler invocation, and translation of
//! the captured state back to the destination framework. Exactly one
//! response is produced per invocation, whatever the handler does.

use crate::bridge::app::Next;
use crate::bridge::request::{InboundRequest, SyntheticRequest};
use crate::bridge::response::{Resolution, SyntheticResponse};
use crate::bridge::runtime::Bridge;
use crate::extract::HttpMethod;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;

/// Translated response handed back to the destination framework.
#[derive(Debug, Clone, PartialEq)]
pub struct BridgeResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers captured from the handler.
    pub headers: HashMap<String, String>,
    /// JSON payload.
    pub body: Value,
}

impl BridgeResponse {
    fn json(status: u16, body: Value) -> Self {
        BridgeResponse {
            status,
            headers: HashMap::new(),
            body,
        }
    }
}

enum Waited {
    Resolved(Resolution),
    HandlerFailed(String),
}

impl Bridge {
    /// Dispatches an inbound call to the original handler registered for
    /// `(method, path)`.
    ///
    /// Outcomes, exactly one per invocation:
    /// - the handler responds: captured status/headers/payload verbatim;
    /// - the handler calls the continuation without responding: 500;
    /// - the handler returns an error: logged, 500 with a generic payload;
    /// - no table entry matches: 404, a normal outcome rather than an error;
    /// - nothing resolves within the bridge timeout: 504.
    pub async fn dispatch(
        &self,
        method: HttpMethod,
        path: &str,
        inbound: InboundRequest,
    ) -> BridgeResponse {
        let router = self.application().await;

        let Some(entry) = router.find(method, path) else {
            tracing::debug!(%method, path, "no matching route entry");
            return BridgeResponse::json(
                404,
                json!({ "error": "Route not found", "path": path, "method": method.as_str() }),
            );
        };

        let request = SyntheticRequest::from_inbound(method, path, inbound);
        let (response, mut resolved) = SyntheticResponse::channel();
        let next = Next::new(response.clone());

        let handler = Arc::clone(&entry.handlers[0]);
        let mut invocation = handler(request, response.clone(), next);
        let mut handler_running = true;

        let waited = tokio::time::timeout(self.timeout(), async {
            loop {
                if handler_running {
                    tokio::select! {
                        finished = &mut invocation => {
                            handler_running = false;
                            if let Err(error) = finished {
                                return Waited::HandlerFailed(error.to_string());
                            }
                            // Completed cleanly without resolving yet; keep
                            // waiting for a terminal mutator or the timeout.
                        }
                        resolution = &mut resolved => {
                            return Waited::Resolved(resolution.unwrap_or(Resolution::FellThrough));
                        }
                    }
                } else {
                    let resolution = (&mut resolved).await;
                    return Waited::Resolved(resolution.unwrap_or(Resolution::FellThrough));
                }
            }
        })
        .await;

        match waited {
            Ok(Waited::Resolved(Resolution::Responded)) => {
                let (status, headers, body) = response.snapshot();
                BridgeResponse { status, headers, body }
            }
            Ok(Waited::Resolved(Resolution::FellThrough)) => BridgeResponse::json(
                500,
                json!({ "error": "Route handler completed without response" }),
            ),
            Ok(Waited::HandlerFailed(error)) => {
                tracing::error!(%method, path, %error, "bridged handler failed");
                let mut body = json!({ "error": "Internal server error" });
                if cfg!(debug_assertions) {
                    body["message"] = Value::String(error);
                }
                BridgeResponse::json(500, body)
            }
            Err(_elapsed) => {
                tracing::warn!(%method, path, "bridged invocation timed out");
                BridgeResponse::json(
                    504,
                    json!({ "error": "Gateway timeout", "path": path, "method": method.as_str() }),
                )
            }
        }
    }
}
