#![deny(missing_docs)]

//! # Domain Errors
//!
//! The single normalized error domain services surface. Each variant
//! carries the user-facing message; the route layer maps variants onto
//! HTTP statuses.

use derive_more::Display;

/// Normalized error carrying a user-facing message.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input failed validation.
    #[display("{_0}")]
    Validation(String),

    /// The referenced record does not exist.
    #[display("{_0}")]
    NotFound(String),

    /// A uniqueness or reference constraint was violated.
    #[display("{_0}")]
    Conflict(String),

    /// Opaque persistence failure.
    #[display("{_0}")]
    Storage(String),
}

impl DomainError {
    /// HTTP status the route layer maps this error to.
    pub fn status(&self) -> u16 {
        match self {
            DomainError::Validation(_) => 400,
            DomainError::NotFound(_) => 404,
            DomainError::Conflict(_) => 409,
            DomainError::Storage(_) => 500,
        }
    }
}

impl std::error::Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(DomainError::Validation("bad".into()).status(), 400);
        assert_eq!(DomainError::NotFound("gone".into()).status(), 404);
        assert_eq!(DomainError::Conflict("dup".into()).status(), 409);
        assert_eq!(DomainError::Storage("boom".into()).status(), 500);
    }

    #[test]
    fn test_display_is_the_user_facing_message() {
        let err = DomainError::Conflict("a transfer with this number already exists".into());
        assert_eq!(err.to_string(), "a transfer with this number already exists");
    }
}
