#![deny(missing_docs)]

//! # Material Service

use crate::domain::error::DomainError;
use crate::domain::models::{Material, NewMaterial};
use crate::domain::services::parse_payload;
use crate::domain::storage::Storage;
use crate::domain::Envelope;
use serde_json::Value;
use std::sync::Arc;

/// Business logic for materials.
#[derive(Clone)]
pub struct MaterialService {
    storage: Arc<dyn Storage>,
}

impl MaterialService {
    /// Creates the service over a storage backend.
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        MaterialService { storage }
    }

    /// Lists all materials.
    pub async fn list(&self) -> Result<Envelope<Vec<Material>>, DomainError> {
        let materials = self
            .storage
            .materials()
            .await
            .map_err(|_| DomainError::Storage("failed to load materials".into()))?;
        Ok(Envelope::ok(materials))
    }

    /// Creates a material from a request payload.
    pub async fn create(&self, payload: Value) -> Result<Envelope<Material>, DomainError> {
        let input: NewMaterial = parse_payload(payload, "invalid material data")?;
        input.validate()?;
        let material = self
            .storage
            .create_material(input)
            .await
            .map_err(|_| DomainError::Storage("failed to create material".into()))?;
        Ok(Envelope::ok(material))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::memory::MemStorage;
    use serde_json::json;

    fn service() -> MaterialService {
        MaterialService::new(Arc::new(MemStorage::default()))
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let svc = service();
        svc.create(json!({"name": "cement", "unit": "bag"})).await.unwrap();
        let listed = svc.list().await.unwrap();
        assert_eq!(listed.data.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unit_is_required() {
        let svc = service();
        let err = svc.create(json!({"name": "cement", "unit": ""})).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
