//! Input validation for create operations.
//!
//! Every violation is collected so a client sees all problems at once.

use crate::error::{DomainError, DomainResult};
use crate::models::{EnergyAssetType, ProjectStatus};

/// Input for creating a customer.
#[derive(Debug, Clone, Default)]
pub struct CreateCustomerInput {
    pub name: String,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub country: Option<String>,
}

/// Input for creating a project.
#[derive(Debug, Clone)]
pub struct CreateProjectInput {
    pub customer_id: String,
    pub name: String,
    pub status: ProjectStatus,
    pub city: Option<String>,
    pub country: Option<String>,
}

/// Input for creating an energy asset.
#[derive(Debug, Clone)]
pub struct CreateEnergyAssetInput {
    pub project_id: String,
    pub asset_type: EnergyAssetType,
    pub name: Option<String>,
    pub capacity_kw: f64,
    pub active: bool,
}

fn non_empty(value: &str, field: &str, errors: &mut Vec<String>) {
    if value.trim().is_empty() {
        errors.push(format!("{field} is required"));
    }
}

fn positive(value: f64, field: &str, errors: &mut Vec<String>) {
    if !value.is_finite() || value <= 0.0 {
        errors.push(format!("{field} must be a positive number"));
    }
}

fn finish(errors: Vec<String>) -> DomainResult<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(DomainError::Validation(errors))
    }
}

pub fn validate_create_customer(input: &CreateCustomerInput) -> DomainResult<()> {
    let mut errors = Vec::new();
    non_empty(&input.name, "name", &mut errors);
    finish(errors)
}

pub fn validate_create_project(input: &CreateProjectInput) -> DomainResult<()> {
    let mut errors = Vec::new();
    non_empty(&input.customer_id, "customerId", &mut errors);
    non_empty(&input.name, "name", &mut errors);
    finish(errors)
}

pub fn validate_create_energy_asset(input: &CreateEnergyAssetInput) -> DomainResult<()> {
    let mut errors = Vec::new();
    non_empty(&input.project_id, "projectId", &mut errors);
    positive(input.capacity_kw, "capacityKw", &mut errors);
    finish(errors)
}
