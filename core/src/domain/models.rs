#![deny(missing_docs)]

//! # Domain Models
//!
//! Records for the five managed entities plus their insert payloads.
//! Identifiers and dates are plain strings, matching the wire format the
//! application exchanges with its clients.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};

fn required(value: &str, message: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        Err(DomainError::Validation(message.to_string()))
    } else {
        Ok(())
    }
}

/// A construction project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Record identifier.
    pub id: String,
    /// Project name, unique per site conventions but not enforced.
    pub name: String,
    /// Lifecycle status, e.g. `active` or `completed`.
    pub status: String,
}

/// Insert payload for a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProject {
    /// Project name.
    pub name: String,
    /// Lifecycle status; defaults to `active`.
    #[serde(default)]
    pub status: Option<String>,
}

impl NewProject {
    /// Validates the payload.
    pub fn validate(&self) -> Result<(), DomainError> {
        required(&self.name, "project name is required")
    }
}

/// A worker on the payroll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    /// Record identifier.
    pub id: String,
    /// Worker name, unique.
    pub name: String,
    /// Trade, e.g. `mason` or `electrician`.
    #[serde(rename = "type")]
    pub worker_type: String,
    /// Agreed daily wage.
    pub daily_wage: f64,
    /// Whether the worker is currently active.
    pub is_active: bool,
}

/// Insert payload for a worker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewWorker {
    /// Worker name.
    pub name: String,
    /// Trade.
    #[serde(rename = "type")]
    pub worker_type: String,
    /// Agreed daily wage.
    pub daily_wage: f64,
    /// Active flag; defaults to true.
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl NewWorker {
    /// Validates the payload.
    pub fn validate(&self) -> Result<(), DomainError> {
        required(&self.name, "worker name is required")?;
        required(&self.worker_type, "worker type is required")?;
        if self.daily_wage <= 0.0 {
            return Err(DomainError::Validation("daily wage must be positive".into()));
        }
        Ok(())
    }
}

/// A material supplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    /// Record identifier.
    pub id: String,
    /// Supplier name.
    pub name: String,
    /// Contact phone, if known.
    pub contact_phone: Option<String>,
    /// Postal address, if known.
    pub address: Option<String>,
}

/// Insert payload for a supplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSupplier {
    /// Supplier name.
    pub name: String,
    /// Contact phone.
    #[serde(default)]
    pub contact_phone: Option<String>,
    /// Postal address.
    #[serde(default)]
    pub address: Option<String>,
}

impl NewSupplier {
    /// Validates the payload.
    pub fn validate(&self) -> Result<(), DomainError> {
        required(&self.name, "supplier name is required")
    }
}

/// A fund transfer credited to a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundTransfer {
    /// Record identifier.
    pub id: String,
    /// The project this transfer funds.
    pub project_id: String,
    /// Transferred amount.
    pub amount: f64,
    /// Wire transfer number, unique across all transfers.
    pub transfer_number: String,
    /// Sender, if recorded.
    pub sender_name: Option<String>,
    /// Transfer date.
    pub transfer_date: String,
}

/// Insert payload for a fund transfer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFundTransfer {
    /// The funded project.
    pub project_id: String,
    /// Transferred amount.
    pub amount: f64,
    /// Wire transfer number.
    pub transfer_number: String,
    /// Sender name.
    #[serde(default)]
    pub sender_name: Option<String>,
    /// Transfer date.
    pub transfer_date: String,
}

impl NewFundTransfer {
    /// Validates the payload.
    pub fn validate(&self) -> Result<(), DomainError> {
        required(&self.project_id, "project reference is required")?;
        required(&self.transfer_number, "transfer number is required")?;
        required(&self.transfer_date, "transfer date is required")?;
        if self.amount <= 0.0 {
            return Err(DomainError::Validation("transfer amount must be positive".into()));
        }
        Ok(())
    }
}

/// A construction material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Record identifier.
    pub id: String,
    /// Material name.
    pub name: String,
    /// Category, e.g. `cement` or `steel`.
    pub category: Option<String>,
    /// Unit of measure, e.g. `bag` or `ton`.
    pub unit: String,
}

/// Insert payload for a material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMaterial {
    /// Material name.
    pub name: String,
    /// Category.
    #[serde(default)]
    pub category: Option<String>,
    /// Unit of measure.
    pub unit: String,
}

impl NewMaterial {
    /// Validates the payload.
    pub fn validate(&self) -> Result<(), DomainError> {
        required(&self.name, "material name is required")?;
        required(&self.unit, "material unit is required")
    }
}
