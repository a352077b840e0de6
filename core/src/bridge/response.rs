#![deny(missing_docs)]

//! # Synthetic Response
//!
//! The mutable capture object handed to a borrowed handler. Mutators chain
//! like the original framework's response builder; the first terminal
//! mutator (`json`/`send`/`end`) resolves the owning dispatch exactly once,
//! later calls still update the captured state.

use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

/// How a bridged invocation came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Resolution {
    /// A terminal mutator ran; the captured state is the response.
    Responded,
    /// The pass-through continuation ran without a response.
    FellThrough,
}

#[derive(Debug)]
struct ResponseState {
    status: u16,
    headers: HashMap<String, String>,
    data: Value,
    resolver: Option<oneshot::Sender<Resolution>>,
}

/// Shared-handle response capture object.
///
/// Cloning yields another handle onto the same captured state, which is how
/// the dispatcher keeps reading after the handler resolved.
#[derive(Debug, Clone)]
pub struct SyntheticResponse {
    state: Arc<Mutex<ResponseState>>,
}

impl SyntheticResponse {
    /// Creates a response paired with the receiver its terminal mutators
    /// resolve.
    pub(crate) fn channel() -> (Self, oneshot::Receiver<Resolution>) {
        let (tx, rx) = oneshot::channel();
        let response = SyntheticResponse {
            state: Arc::new(Mutex::new(ResponseState {
                status: 200,
                headers: HashMap::new(),
                data: Value::Null,
                resolver: Some(tx),
            })),
        };
        (response, rx)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ResponseState> {
        self.state.lock().expect("synthetic response state poisoned")
    }

    /// Sets the status code. Chainable.
    pub fn status(&self, code: u16) -> &Self {
        self.lock().status = code;
        self
    }

    /// Sets a response header. Chainable.
    pub fn set_header(&self, name: &str, value: &str) -> &Self {
        self.lock().headers.insert(name.to_string(), value.to_string());
        self
    }

    /// Terminal mutator: captures a JSON payload and resolves the dispatch.
    pub fn json(&self, data: Value) -> &Self {
        self.terminal(Some(data));
        self
    }

    /// Terminal mutator: alias of [`SyntheticResponse::json`] for handlers
    /// written against the send-style API.
    pub fn send(&self, data: Value) -> &Self {
        self.terminal(Some(data));
        self
    }

    /// Terminal mutator: resolves the dispatch, optionally updating the
    /// captured payload first.
    pub fn end(&self, data: Option<Value>) -> &Self {
        self.terminal(data);
        self
    }

    fn terminal(&self, data: Option<Value>) {
        let mut state = self.lock();
        if let Some(data) = data {
            state.data = data;
        }
        if let Some(resolver) = state.resolver.take() {
            let _ = resolver.send(Resolution::Responded);
        }
    }

    /// Resolves the dispatch without a response, used by the pass-through
    /// continuation. No-op once a resolution happened.
    pub(crate) fn fall_through(&self) {
        let mut state = self.lock();
        if let Some(resolver) = state.resolver.take() {
            let _ = resolver.send(Resolution::FellThrough);
        }
    }

    /// Captured status code.
    pub fn status_code(&self) -> u16 {
        self.lock().status
    }

    /// Captured payload.
    pub fn data(&self) -> Value {
        self.lock().data.clone()
    }

    /// Captured headers.
    pub fn headers(&self) -> HashMap<String, String> {
        self.lock().headers.clone()
    }

    pub(crate) fn snapshot(&self) -> (u16, HashMap<String, String>, Value) {
        let state = self.lock();
        (state.status, state.headers.clone(), state.data.clone())
    }
}
