#![deny(missing_docs)]

//! # Domain Layer
//!
//! The construction-management entities, the storage port they persist
//! through, the services wrapping validation and error translation around
//! that port, and the route registration that exposes everything on the
//! original application.

pub mod error;
pub mod memory;
pub mod models;
pub mod routes;
pub mod services;
pub mod storage;

pub use error::DomainError;
pub use routes::register_routes;

use serde::{Deserialize, Serialize};

/// Unified service response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Whether the operation succeeded.
    pub success: bool,
    /// Payload on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Informational message, e.g. after a deletion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// User-facing error description on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    /// Successful envelope carrying data.
    pub fn ok(data: T) -> Self {
        Envelope {
            success: true,
            data: Some(data),
            message: None,
            error: None,
        }
    }

    /// Successful envelope carrying only a message.
    pub fn ok_message(message: impl Into<String>) -> Self {
        Envelope {
            success: true,
            data: None,
            message: Some(message.into()),
            error: None,
        }
    }

    /// Failed envelope carrying a user-facing error.
    pub fn fail(error: impl Into<String>) -> Self {
        Envelope {
            success: false,
            data: None,
            message: None,
            error: Some(error.into()),
        }
    }
}
