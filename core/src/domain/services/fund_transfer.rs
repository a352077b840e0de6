#![deny(missing_docs)]

//! # Fund Transfer Service
//!
//! Transfers carry two backend constraints worth a precise message: the
//! unique wire transfer number and the project reference. Everything else
//! passes through as an opaque storage failure.

use crate::domain::error::DomainError;
use crate::domain::models::{FundTransfer, NewFundTransfer};
use crate::domain::services::parse_payload;
use crate::domain::storage::{Storage, StorageError};
use crate::domain::Envelope;
use serde_json::Value;
use std::sync::Arc;

/// Business logic for fund transfers.
#[derive(Clone)]
pub struct FundTransferService {
    storage: Arc<dyn Storage>,
}

impl FundTransferService {
    /// Creates the service over a storage backend.
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        FundTransferService { storage }
    }

    fn translate(err: StorageError, fallback: &str) -> DomainError {
        match err {
            StorageError::UniqueViolation { constraint }
                if constraint.starts_with("fund_transfers_transfer_number") =>
            {
                DomainError::Conflict("a transfer with this number already exists".into())
            }
            StorageError::ForeignKeyViolation { .. } => {
                DomainError::Conflict("referenced project not found".into())
            }
            _ => DomainError::Storage(fallback.to_string()),
        }
    }

    /// Lists transfers, optionally filtered by project and date.
    pub async fn list(
        &self,
        project_id: Option<&str>,
        date: Option<&str>,
    ) -> Result<Envelope<Vec<FundTransfer>>, DomainError> {
        let transfers = self
            .storage
            .fund_transfers(project_id, date)
            .await
            .map_err(|_| DomainError::Storage("failed to load transfers".into()))?;
        Ok(Envelope::ok(transfers))
    }

    /// Creates a transfer from a request payload.
    pub async fn create(&self, payload: Value) -> Result<Envelope<FundTransfer>, DomainError> {
        let input: NewFundTransfer = parse_payload(payload, "invalid transfer data")?;
        input.validate()?;
        let transfer = self
            .storage
            .create_fund_transfer(input)
            .await
            .map_err(|e| Self::translate(e, "failed to create transfer"))?;
        Ok(Envelope::ok(transfer))
    }

    /// Updates a transfer from a request payload.
    pub async fn update(
        &self,
        id: &str,
        payload: Value,
    ) -> Result<Envelope<FundTransfer>, DomainError> {
        let input: NewFundTransfer = parse_payload(payload, "invalid transfer data")?;
        input.validate()?;
        let transfer = self
            .storage
            .update_fund_transfer(id, input)
            .await
            .map_err(|e| Self::translate(e, "failed to update transfer"))?;
        match transfer {
            Some(transfer) => Ok(Envelope::ok(transfer)),
            None => Err(DomainError::NotFound("transfer not found".into())),
        }
    }

    /// Deletes a transfer.
    pub async fn delete(&self, id: &str) -> Result<Envelope<()>, DomainError> {
        self.storage
            .delete_fund_transfer(id)
            .await
            .map_err(|_| DomainError::Storage("failed to delete transfer".into()))?;
        Ok(Envelope::ok_message("transfer deleted"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::memory::MemStorage;
    use crate::domain::models::NewProject;
    use serde_json::json;

    async fn service_with_project() -> (FundTransferService, String) {
        let storage = Arc::new(MemStorage::default());
        let project = storage
            .create_project(NewProject { name: "villa".into(), status: None })
            .await
            .unwrap();
        (FundTransferService::new(storage), project.id)
    }

    fn transfer(project_id: &str, number: &str) -> Value {
        json!({
            "project_id": project_id,
            "amount": 1500.0,
            "transfer_number": number,
            "transfer_date": "2024-05-01"
        })
    }

    #[tokio::test]
    async fn test_duplicate_number_gets_its_specific_message() {
        let (svc, project_id) = service_with_project().await;
        svc.create(transfer(&project_id, "TR-1")).await.unwrap();
        let err = svc.create(transfer(&project_id, "TR-1")).await.unwrap_err();
        assert_eq!(
            err,
            DomainError::Conflict("a transfer with this number already exists".into())
        );
    }

    #[tokio::test]
    async fn test_missing_project_gets_its_specific_message() {
        let (svc, _project_id) = service_with_project().await;
        let err = svc.create(transfer("p-404", "TR-1")).await.unwrap_err();
        assert_eq!(err, DomainError::Conflict("referenced project not found".into()));
    }

    #[tokio::test]
    async fn test_list_filters_by_project_and_date() {
        let (svc, project_id) = service_with_project().await;
        svc.create(transfer(&project_id, "TR-1")).await.unwrap();

        let all = svc.list(None, None).await.unwrap();
        assert_eq!(all.data.unwrap().len(), 1);

        let other = svc.list(Some("p-other"), None).await.unwrap();
        assert!(other.data.unwrap().is_empty());

        let wrong_date = svc.list(Some(&project_id), Some("1999-01-01")).await.unwrap();
        assert!(wrong_date.data.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_amount_must_be_positive() {
        let (svc, project_id) = service_with_project().await;
        let err = svc
            .create(json!({
                "project_id": project_id,
                "amount": 0.0,
                "transfer_number": "TR-1",
                "transfer_date": "2024-05-01"
            }))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
