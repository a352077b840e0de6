#![deny(missing_docs)]

//! # Project Service

use crate::domain::error::DomainError;
use crate::domain::models::{NewProject, Project};
use crate::domain::services::parse_payload;
use crate::domain::storage::Storage;
use crate::domain::Envelope;
use serde_json::Value;
use std::sync::Arc;

/// Business logic for projects.
#[derive(Clone)]
pub struct ProjectService {
    storage: Arc<dyn Storage>,
}

impl ProjectService {
    /// Creates the service over a storage backend.
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        ProjectService { storage }
    }

    /// Lists all projects.
    pub async fn list(&self) -> Result<Envelope<Vec<Project>>, DomainError> {
        let projects = self
            .storage
            .projects()
            .await
            .map_err(|_| DomainError::Storage("failed to load projects".into()))?;
        Ok(Envelope::ok(projects))
    }

    /// Fetches one project.
    pub async fn get(&self, id: &str) -> Result<Envelope<Project>, DomainError> {
        let project = self
            .storage
            .project(id)
            .await
            .map_err(|_| DomainError::Storage("failed to load project".into()))?;
        match project {
            Some(project) => Ok(Envelope::ok(project)),
            None => Err(DomainError::NotFound("project not found".into())),
        }
    }

    /// Creates a project from a request payload.
    pub async fn create(&self, payload: Value) -> Result<Envelope<Project>, DomainError> {
        let input: NewProject = parse_payload(payload, "invalid project data")?;
        input.validate()?;
        let project = self
            .storage
            .create_project(input)
            .await
            .map_err(|_| DomainError::Storage("failed to create project".into()))?;
        Ok(Envelope::ok(project))
    }

    /// Updates a project from a request payload.
    pub async fn update(&self, id: &str, payload: Value) -> Result<Envelope<Project>, DomainError> {
        let input: NewProject = parse_payload(payload, "invalid project data")?;
        input.validate()?;
        let project = self
            .storage
            .update_project(id, input)
            .await
            .map_err(|_| DomainError::Storage("failed to update project".into()))?;
        match project {
            Some(project) => Ok(Envelope::ok(project)),
            None => Err(DomainError::NotFound("project not found".into())),
        }
    }

    /// Deletes a project.
    pub async fn delete(&self, id: &str) -> Result<Envelope<()>, DomainError> {
        self.storage
            .delete_project(id)
            .await
            .map_err(|_| DomainError::Storage("failed to delete project".into()))?;
        Ok(Envelope::ok_message("project deleted"))
    }
}
