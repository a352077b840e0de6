#![deny(missing_docs)]

//! # Domain Services
//!
//! One service per entity. Each is a thin validate-and-delegate wrapper
//! around the storage port: it checks the payload, forwards to storage,
//! translates constraint failures into user-facing messages and wraps the
//! outcome in the unified envelope.

mod fund_transfer;
mod material;
mod project;
mod supplier;
mod worker;

pub use fund_transfer::FundTransferService;
pub use material::MaterialService;
pub use project::ProjectService;
pub use supplier::SupplierService;
pub use worker::WorkerService;

use crate::domain::error::DomainError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Deserializes a request payload into a typed insert struct, surfacing a
/// validation error with the given message on shape mismatch.
pub(crate) fn parse_payload<T: DeserializeOwned>(
    payload: Value,
    message: &str,
) -> Result<T, DomainError> {
    serde_json::from_value(payload).map_err(|_| DomainError::Validation(message.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::NewProject;

    #[test]
    fn test_parse_payload_maps_shape_errors_to_validation() {
        let err = parse_payload::<NewProject>(serde_json::json!(42), "invalid project data")
            .unwrap_err();
        assert_eq!(err, DomainError::Validation("invalid project data".into()));
    }
}
