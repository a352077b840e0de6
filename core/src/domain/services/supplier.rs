#![deny(missing_docs)]

//! # Supplier Service

use crate::domain::error::DomainError;
use crate::domain::models::{NewSupplier, Supplier};
use crate::domain::services::parse_payload;
use crate::domain::storage::Storage;
use crate::domain::Envelope;
use serde_json::Value;
use std::sync::Arc;

/// Business logic for suppliers.
#[derive(Clone)]
pub struct SupplierService {
    storage: Arc<dyn Storage>,
}

impl SupplierService {
    /// Creates the service over a storage backend.
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        SupplierService { storage }
    }

    /// Lists all suppliers.
    pub async fn list(&self) -> Result<Envelope<Vec<Supplier>>, DomainError> {
        let suppliers = self
            .storage
            .suppliers()
            .await
            .map_err(|_| DomainError::Storage("failed to load suppliers".into()))?;
        Ok(Envelope::ok(suppliers))
    }

    /// Creates a supplier from a request payload.
    pub async fn create(&self, payload: Value) -> Result<Envelope<Supplier>, DomainError> {
        let input: NewSupplier = parse_payload(payload, "invalid supplier data")?;
        input.validate()?;
        let supplier = self
            .storage
            .create_supplier(input)
            .await
            .map_err(|_| DomainError::Storage("failed to create supplier".into()))?;
        Ok(Envelope::ok(supplier))
    }

    /// Updates a supplier from a request payload.
    pub async fn update(
        &self,
        id: &str,
        payload: Value,
    ) -> Result<Envelope<Supplier>, DomainError> {
        let input: NewSupplier = parse_payload(payload, "invalid supplier data")?;
        input.validate()?;
        let supplier = self
            .storage
            .update_supplier(id, input)
            .await
            .map_err(|_| DomainError::Storage("failed to update supplier".into()))?;
        match supplier {
            Some(supplier) => Ok(Envelope::ok(supplier)),
            None => Err(DomainError::NotFound("supplier not found".into())),
        }
    }

    /// Deletes a supplier.
    pub async fn delete(&self, id: &str) -> Result<Envelope<()>, DomainError> {
        self.storage
            .delete_supplier(id)
            .await
            .map_err(|_| DomainError::Storage("failed to delete supplier".into()))?;
        Ok(Envelope::ok_message("supplier deleted"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::memory::MemStorage;
    use serde_json::json;

    fn service() -> SupplierService {
        SupplierService::new(Arc::new(MemStorage::default()))
    }

    #[tokio::test]
    async fn test_create_with_optional_fields_absent() {
        let svc = service();
        let created = svc.create(json!({"name": "Steel Co"})).await.unwrap();
        let supplier = created.data.unwrap();
        assert_eq!(supplier.contact_phone, None);
        assert_eq!(supplier.address, None);
    }

    #[tokio::test]
    async fn test_name_is_required() {
        let svc = service();
        let err = svc.create(json!({"name": ""})).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_round_trip() {
        let svc = service();
        let id = svc
            .create(json!({"name": "Steel Co"}))
            .await
            .unwrap()
            .data
            .unwrap()
            .id;
        let updated = svc
            .update(&id, json!({"name": "Steel & Cement Co", "contact_phone": "0777"}))
            .await
            .unwrap();
        let supplier = updated.data.unwrap();
        assert_eq!(supplier.name, "Steel & Cement Co");
        assert_eq!(supplier.contact_phone.as_deref(), Some("0777"));
    }
}
