#![deny(missing_docs)]

//! # Worker Service

use crate::domain::error::DomainError;
use crate::domain::models::{NewWorker, Worker};
use crate::domain::services::parse_payload;
use crate::domain::storage::{Storage, StorageError};
use crate::domain::Envelope;
use serde_json::Value;
use std::sync::Arc;

/// Business logic for workers.
#[derive(Clone)]
pub struct WorkerService {
    storage: Arc<dyn Storage>,
}

impl WorkerService {
    /// Creates the service over a storage backend.
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        WorkerService { storage }
    }

    fn translate(err: StorageError, fallback: &str) -> DomainError {
        match err {
            StorageError::UniqueViolation { constraint }
                if constraint.starts_with("workers_name") =>
            {
                DomainError::Conflict("a worker with this name already exists".into())
            }
            _ => DomainError::Storage(fallback.to_string()),
        }
    }

    /// Lists all workers.
    pub async fn list(&self) -> Result<Envelope<Vec<Worker>>, DomainError> {
        let workers = self
            .storage
            .workers()
            .await
            .map_err(|_| DomainError::Storage("failed to load workers".into()))?;
        Ok(Envelope::ok(workers))
    }

    /// Creates a worker from a request payload.
    pub async fn create(&self, payload: Value) -> Result<Envelope<Worker>, DomainError> {
        let input: NewWorker = parse_payload(payload, "invalid worker data")?;
        input.validate()?;
        let worker = self
            .storage
            .create_worker(input)
            .await
            .map_err(|e| Self::translate(e, "failed to create worker"))?;
        Ok(Envelope::ok(worker))
    }

    /// Updates a worker from a request payload.
    pub async fn update(&self, id: &str, payload: Value) -> Result<Envelope<Worker>, DomainError> {
        let input: NewWorker = parse_payload(payload, "invalid worker data")?;
        input.validate()?;
        let worker = self
            .storage
            .update_worker(id, input)
            .await
            .map_err(|e| Self::translate(e, "failed to update worker"))?;
        match worker {
            Some(worker) => Ok(Envelope::ok(worker)),
            None => Err(DomainError::NotFound("worker not found".into())),
        }
    }

    /// Deletes a worker.
    pub async fn delete(&self, id: &str) -> Result<Envelope<()>, DomainError> {
        self.storage
            .delete_worker(id)
            .await
            .map_err(|_| DomainError::Storage("failed to delete worker".into()))?;
        Ok(Envelope::ok_message("worker deleted"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::memory::MemStorage;
    use serde_json::json;

    fn service() -> WorkerService {
        WorkerService::new(Arc::new(MemStorage::default()))
    }

    fn ahmad() -> Value {
        json!({"name": "Ahmad", "type": "mason", "daily_wage": 90.0})
    }

    #[tokio::test]
    async fn test_create_defaults_to_active() {
        let svc = service();
        let created = svc.create(ahmad()).await.unwrap();
        assert!(created.data.unwrap().is_active);
    }

    #[tokio::test]
    async fn test_duplicate_name_translates_to_conflict() {
        let svc = service();
        svc.create(ahmad()).await.unwrap();
        let err = svc.create(ahmad()).await.unwrap_err();
        assert_eq!(
            err,
            DomainError::Conflict("a worker with this name already exists".into())
        );
    }

    #[tokio::test]
    async fn test_invalid_wage_is_a_validation_error() {
        let svc = service();
        let err = svc
            .create(json!({"name": "Ahmad", "type": "mason", "daily_wage": -5.0}))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let svc = service();
        let err = svc.update("w-404", ahmad()).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }
}
