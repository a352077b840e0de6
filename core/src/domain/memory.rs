#![deny(missing_docs)]

//! # In-Memory Storage
//!
//! Backend used by tests and as the default for the shared bridge. Enforces
//! the same constraints a relational backend would surface: unique transfer
//! numbers, unique worker names, and the project foreign key on transfers.

use crate::domain::models::{
    FundTransfer, Material, NewFundTransfer, NewMaterial, NewProject, NewSupplier, NewWorker,
    Project, Supplier, Worker,
};
use crate::domain::storage::{Storage, StorageError, StorageResult};
use async_trait::async_trait;
use std::sync::Mutex;

#[derive(Debug, Default)]
struct MemState {
    projects: Vec<Project>,
    workers: Vec<Worker>,
    suppliers: Vec<Supplier>,
    transfers: Vec<FundTransfer>,
    materials: Vec<Material>,
    next_id: u64,
}

impl MemState {
    fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{}-{}", prefix, self.next_id)
    }
}

/// In-memory [`Storage`] implementation.
#[derive(Debug, Default)]
pub struct MemStorage {
    state: Mutex<MemState>,
}

impl MemStorage {
    fn lock(&self) -> std::sync::MutexGuard<'_, MemState> {
        self.state.lock().expect("storage state poisoned")
    }
}

#[async_trait]
impl Storage for MemStorage {
    async fn projects(&self) -> StorageResult<Vec<Project>> {
        Ok(self.lock().projects.clone())
    }

    async fn project(&self, id: &str) -> StorageResult<Option<Project>> {
        Ok(self.lock().projects.iter().find(|p| p.id == id).cloned())
    }

    async fn create_project(&self, input: NewProject) -> StorageResult<Project> {
        let mut state = self.lock();
        let project = Project {
            id: state.next_id("p"),
            name: input.name,
            status: input.status.unwrap_or_else(|| "active".to_string()),
        };
        state.projects.push(project.clone());
        Ok(project)
    }

    async fn update_project(&self, id: &str, input: NewProject) -> StorageResult<Option<Project>> {
        let mut state = self.lock();
        match state.projects.iter_mut().find(|p| p.id == id) {
            Some(project) => {
                project.name = input.name;
                if let Some(status) = input.status {
                    project.status = status;
                }
                Ok(Some(project.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_project(&self, id: &str) -> StorageResult<()> {
        self.lock().projects.retain(|p| p.id != id);
        Ok(())
    }

    async fn workers(&self) -> StorageResult<Vec<Worker>> {
        Ok(self.lock().workers.clone())
    }

    async fn create_worker(&self, input: NewWorker) -> StorageResult<Worker> {
        let mut state = self.lock();
        if state.workers.iter().any(|w| w.name == input.name) {
            return Err(StorageError::UniqueViolation {
                constraint: "workers_name_key".to_string(),
            });
        }
        let worker = Worker {
            id: state.next_id("w"),
            name: input.name,
            worker_type: input.worker_type,
            daily_wage: input.daily_wage,
            is_active: input.is_active.unwrap_or(true),
        };
        state.workers.push(worker.clone());
        Ok(worker)
    }

    async fn update_worker(&self, id: &str, input: NewWorker) -> StorageResult<Option<Worker>> {
        let mut state = self.lock();
        if state.workers.iter().any(|w| w.name == input.name && w.id != id) {
            return Err(StorageError::UniqueViolation {
                constraint: "workers_name_key".to_string(),
            });
        }
        match state.workers.iter_mut().find(|w| w.id == id) {
            Some(worker) => {
                worker.name = input.name;
                worker.worker_type = input.worker_type;
                worker.daily_wage = input.daily_wage;
                if let Some(active) = input.is_active {
                    worker.is_active = active;
                }
                Ok(Some(worker.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_worker(&self, id: &str) -> StorageResult<()> {
        self.lock().workers.retain(|w| w.id != id);
        Ok(())
    }

    async fn suppliers(&self) -> StorageResult<Vec<Supplier>> {
        Ok(self.lock().suppliers.clone())
    }

    async fn create_supplier(&self, input: NewSupplier) -> StorageResult<Supplier> {
        let mut state = self.lock();
        let supplier = Supplier {
            id: state.next_id("s"),
            name: input.name,
            contact_phone: input.contact_phone,
            address: input.address,
        };
        state.suppliers.push(supplier.clone());
        Ok(supplier)
    }

    async fn update_supplier(
        &self,
        id: &str,
        input: NewSupplier,
    ) -> StorageResult<Option<Supplier>> {
        let mut state = self.lock();
        match state.suppliers.iter_mut().find(|s| s.id == id) {
            Some(supplier) => {
                supplier.name = input.name;
                supplier.contact_phone = input.contact_phone;
                supplier.address = input.address;
                Ok(Some(supplier.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_supplier(&self, id: &str) -> StorageResult<()> {
        self.lock().suppliers.retain(|s| s.id != id);
        Ok(())
    }

    async fn fund_transfers(
        &self,
        project_id: Option<&str>,
        date: Option<&str>,
    ) -> StorageResult<Vec<FundTransfer>> {
        let state = self.lock();
        Ok(state
            .transfers
            .iter()
            .filter(|t| project_id.map_or(true, |p| t.project_id == p))
            .filter(|t| date.map_or(true, |d| t.transfer_date == d))
            .cloned()
            .collect())
    }

    async fn create_fund_transfer(&self, input: NewFundTransfer) -> StorageResult<FundTransfer> {
        let mut state = self.lock();
        if !state.projects.iter().any(|p| p.id == input.project_id) {
            return Err(StorageError::ForeignKeyViolation {
                constraint: "fund_transfers_project_id_fkey".to_string(),
            });
        }
        if state
            .transfers
            .iter()
            .any(|t| t.transfer_number == input.transfer_number)
        {
            return Err(StorageError::UniqueViolation {
                constraint: "fund_transfers_transfer_number_key".to_string(),
            });
        }
        let transfer = FundTransfer {
            id: state.next_id("t"),
            project_id: input.project_id,
            amount: input.amount,
            transfer_number: input.transfer_number,
            sender_name: input.sender_name,
            transfer_date: input.transfer_date,
        };
        state.transfers.push(transfer.clone());
        Ok(transfer)
    }

    async fn update_fund_transfer(
        &self,
        id: &str,
        input: NewFundTransfer,
    ) -> StorageResult<Option<FundTransfer>> {
        let mut state = self.lock();
        if state
            .transfers
            .iter()
            .any(|t| t.transfer_number == input.transfer_number && t.id != id)
        {
            return Err(StorageError::UniqueViolation {
                constraint: "fund_transfers_transfer_number_key".to_string(),
            });
        }
        match state.transfers.iter_mut().find(|t| t.id == id) {
            Some(transfer) => {
                transfer.project_id = input.project_id;
                transfer.amount = input.amount;
                transfer.transfer_number = input.transfer_number;
                transfer.sender_name = input.sender_name;
                transfer.transfer_date = input.transfer_date;
                Ok(Some(transfer.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_fund_transfer(&self, id: &str) -> StorageResult<()> {
        self.lock().transfers.retain(|t| t.id != id);
        Ok(())
    }

    async fn materials(&self) -> StorageResult<Vec<Material>> {
        Ok(self.lock().materials.clone())
    }

    async fn create_material(&self, input: NewMaterial) -> StorageResult<Material> {
        let mut state = self.lock();
        let material = Material {
            id: state.next_id("m"),
            name: input.name,
            category: input.category,
            unit: input.unit,
        };
        state.materials.push(material.clone());
        Ok(material)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_project(name: &str) -> NewProject {
        NewProject { name: name.into(), status: None }
    }

    fn new_transfer(project_id: &str, number: &str) -> NewFundTransfer {
        NewFundTransfer {
            project_id: project_id.into(),
            amount: 100.0,
            transfer_number: number.into(),
            sender_name: None,
            transfer_date: "2024-05-01".into(),
        }
    }

    #[tokio::test]
    async fn test_project_crud_round_trip() {
        let storage = MemStorage::default();
        let created = storage.create_project(new_project("villa")).await.unwrap();
        assert_eq!(created.status, "active");

        let fetched = storage.project(&created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);

        storage.delete_project(&created.id).await.unwrap();
        assert!(storage.projects().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_worker_name_is_a_unique_violation() {
        let storage = MemStorage::default();
        let worker = NewWorker {
            name: "Ahmad".into(),
            worker_type: "mason".into(),
            daily_wage: 90.0,
            is_active: None,
        };
        storage.create_worker(worker.clone()).await.unwrap();
        let err = storage.create_worker(worker).await.unwrap_err();
        assert_eq!(
            err,
            StorageError::UniqueViolation { constraint: "workers_name_key".into() }
        );
    }

    #[tokio::test]
    async fn test_transfer_requires_existing_project() {
        let storage = MemStorage::default();
        let err = storage
            .create_fund_transfer(new_transfer("p-missing", "TR-1"))
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::ForeignKeyViolation { .. }));
    }

    #[tokio::test]
    async fn test_transfer_number_is_unique() {
        let storage = MemStorage::default();
        let project = storage.create_project(new_project("villa")).await.unwrap();
        storage
            .create_fund_transfer(new_transfer(&project.id, "TR-1"))
            .await
            .unwrap();
        let err = storage
            .create_fund_transfer(new_transfer(&project.id, "TR-1"))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            StorageError::UniqueViolation {
                constraint: "fund_transfers_transfer_number_key".into()
            }
        );
    }

    #[tokio::test]
    async fn test_transfer_filters() {
        let storage = MemStorage::default();
        let a = storage.create_project(new_project("a")).await.unwrap();
        let b = storage.create_project(new_project("b")).await.unwrap();
        storage.create_fund_transfer(new_transfer(&a.id, "TR-1")).await.unwrap();
        storage.create_fund_transfer(new_transfer(&b.id, "TR-2")).await.unwrap();

        let for_a = storage.fund_transfers(Some(&a.id), None).await.unwrap();
        assert_eq!(for_a.len(), 1);
        assert_eq!(for_a[0].transfer_number, "TR-1");

        let all = storage.fund_transfers(None, None).await.unwrap();
        assert_eq!(all.len(), 2);
    }
}
