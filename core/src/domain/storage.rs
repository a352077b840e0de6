#![deny(missing_docs)]

//! # Storage Port
//!
//! The asynchronous CRUD interface the domain services delegate to.
//! Backends surface constraint violations with the offending constraint
//! name so services can translate them into domain-specific messages.

use crate::domain::models::{
    FundTransfer, Material, NewFundTransfer, NewMaterial, NewProject, NewSupplier, NewWorker,
    Project, Supplier, Worker,
};
use async_trait::async_trait;
use derive_more::Display;

/// Failure surfaced by a storage backend.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// A unique constraint was violated.
    #[display("unique constraint violated: {constraint}")]
    UniqueViolation {
        /// The offending constraint name.
        constraint: String,
    },

    /// A foreign key constraint was violated.
    #[display("foreign key constraint violated: {constraint}")]
    ForeignKeyViolation {
        /// The offending constraint name.
        constraint: String,
    },

    /// Any other backend failure.
    #[display("storage backend error: {_0}")]
    Backend(String),
}

impl std::error::Error for StorageError {}

/// Result alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Asynchronous CRUD port for the five managed entities.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Lists all projects.
    async fn projects(&self) -> StorageResult<Vec<Project>>;
    /// Fetches one project.
    async fn project(&self, id: &str) -> StorageResult<Option<Project>>;
    /// Inserts a project.
    async fn create_project(&self, input: NewProject) -> StorageResult<Project>;
    /// Updates a project; `None` when it does not exist.
    async fn update_project(&self, id: &str, input: NewProject) -> StorageResult<Option<Project>>;
    /// Deletes a project. Deleting a missing record is not an error.
    async fn delete_project(&self, id: &str) -> StorageResult<()>;

    /// Lists all workers.
    async fn workers(&self) -> StorageResult<Vec<Worker>>;
    /// Inserts a worker. Names are unique (`workers_name_key`).
    async fn create_worker(&self, input: NewWorker) -> StorageResult<Worker>;
    /// Updates a worker; `None` when it does not exist.
    async fn update_worker(&self, id: &str, input: NewWorker) -> StorageResult<Option<Worker>>;
    /// Deletes a worker.
    async fn delete_worker(&self, id: &str) -> StorageResult<()>;

    /// Lists all suppliers.
    async fn suppliers(&self) -> StorageResult<Vec<Supplier>>;
    /// Inserts a supplier.
    async fn create_supplier(&self, input: NewSupplier) -> StorageResult<Supplier>;
    /// Updates a supplier; `None` when it does not exist.
    async fn update_supplier(&self, id: &str, input: NewSupplier)
        -> StorageResult<Option<Supplier>>;
    /// Deletes a supplier.
    async fn delete_supplier(&self, id: &str) -> StorageResult<()>;

    /// Lists fund transfers, optionally filtered by project and date.
    async fn fund_transfers(
        &self,
        project_id: Option<&str>,
        date: Option<&str>,
    ) -> StorageResult<Vec<FundTransfer>>;
    /// Inserts a fund transfer. Transfer numbers are unique
    /// (`fund_transfers_transfer_number_key`) and the project reference is
    /// enforced (`fund_transfers_project_id_fkey`).
    async fn create_fund_transfer(&self, input: NewFundTransfer) -> StorageResult<FundTransfer>;
    /// Updates a fund transfer; `None` when it does not exist.
    async fn update_fund_transfer(
        &self,
        id: &str,
        input: NewFundTransfer,
    ) -> StorageResult<Option<FundTransfer>>;
    /// Deletes a fund transfer.
    async fn delete_fund_transfer(&self, id: &str) -> StorageResult<()>;

    /// Lists all materials.
    async fn materials(&self) -> StorageResult<Vec<Material>>;
    /// Inserts a material.
    async fn create_material(&self, input: NewMaterial) -> StorageResult<Material>;
}
