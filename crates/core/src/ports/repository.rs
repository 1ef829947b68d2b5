//! Port traits for data repositories.
//!
//! These traits define the storage interface used by the domain layer.
//! Implementations live in the infrastructure layer (e.g., `portfolio-storage`).
//!
//! List operations return the whole partition, already filtered. Ordering
//! and windowing are the pagination engine's job, so adapters are free to
//! return items in any order.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::StorageResult;
use crate::models::{Customer, EnergyAsset, EnergyAssetType, Project, ProjectStatus};

// =============================================================================
// Filter Types
// =============================================================================

/// Filter options for project queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    pub status: Option<ProjectStatus>,
}

impl ProjectFilter {
    pub fn matches(&self, project: &Project) -> bool {
        self.status.is_none_or(|s| project.status == s)
    }
}

/// Filter options for energy asset queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnergyAssetFilter {
    pub asset_type: Option<EnergyAssetType>,
}

impl EnergyAssetFilter {
    pub fn matches(&self, asset: &EnergyAsset) -> bool {
        self.asset_type.is_none_or(|t| asset.asset_type == t)
    }
}

// =============================================================================
// Repository Traits
// =============================================================================

/// Repository for customers.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Get customer by ID.
    async fn get_customer(&self, id: &str) -> StorageResult<Option<Customer>>;

    /// List every customer.
    async fn list_customers(&self) -> StorageResult<Vec<Customer>>;

    /// Insert a new customer. Fails on duplicate ID.
    async fn insert_customer(&self, customer: &Customer) -> StorageResult<()>;
}

/// Repository for projects.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Get project by ID.
    async fn get_project(&self, id: &str) -> StorageResult<Option<Project>>;

    /// List a customer's projects matching `filter`.
    async fn list_projects_by_customer(
        &self,
        customer_id: &str,
        filter: ProjectFilter,
    ) -> StorageResult<Vec<Project>>;

    /// Insert a new project. Fails on duplicate ID.
    async fn insert_project(&self, project: &Project) -> StorageResult<()>;

    /// Add `delta_kw` to a project's total capacity and stamp `updated_at`.
    ///
    /// Returns the updated project, or `StorageError::NotFound` if it is gone.
    async fn add_capacity(
        &self,
        id: &str,
        delta_kw: f64,
        at: DateTime<Utc>,
    ) -> StorageResult<Project>;
}

/// Repository for energy assets.
#[async_trait]
pub trait EnergyAssetRepository: Send + Sync {
    /// Get energy asset by ID.
    async fn get_energy_asset(&self, id: &str) -> StorageResult<Option<EnergyAsset>>;

    /// List a project's assets matching `filter`.
    async fn list_assets_by_project(
        &self,
        project_id: &str,
        filter: EnergyAssetFilter,
    ) -> StorageResult<Vec<EnergyAsset>>;

    /// Insert a new energy asset. Fails on duplicate ID.
    async fn insert_energy_asset(&self, asset: &EnergyAsset) -> StorageResult<()>;
}

// =============================================================================
// Composite Repository
// =============================================================================

/// Combined repository access for the catalog.
pub trait Repositories: Send + Sync {
    /// Access the customer repository.
    fn customers(&self) -> &dyn CustomerRepository;

    /// Access the project repository.
    fn projects(&self) -> &dyn ProjectRepository;

    /// Access the energy asset repository.
    fn energy_assets(&self) -> &dyn EnergyAssetRepository;
}
