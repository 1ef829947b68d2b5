//! In-memory storage adapter.
//!
//! This module implements the repository traits defined in `portfolio-core`
//! on top of a process-local [`MemoryStore`].
//!
//! # Architecture
//!
//! - [`MemoryStore`] - Shared tables behind a `tokio::sync::RwLock`
//! - [`MemRepositories`] - Composite repository implementing `Repositories` trait
//! - Individual repos: `MemCustomerRepository`, `MemProjectRepository`, etc.
//!
//! # Usage
//!
//! ```ignore
//! let store = Arc::new(MemoryStore::with_seed(seed_data()));
//! let repositories = MemRepositories::new(store);
//! ```

mod asset_repo;
mod customer_repo;
mod project_repo;
mod store;

pub use asset_repo::MemEnergyAssetRepository;
pub use customer_repo::MemCustomerRepository;
pub use project_repo::MemProjectRepository;
pub use store::{MemoryStore, StoreStats};

use std::sync::Arc;

use portfolio_core::ports::{
    CustomerRepository, EnergyAssetRepository, ProjectRepository, Repositories,
};

// =============================================================================
// Composite Repository
// =============================================================================

/// Aggregated in-memory repositories implementing the `Repositories` trait.
pub struct MemRepositories {
    store: Arc<MemoryStore>,
    customers: MemCustomerRepository,
    projects: MemProjectRepository,
    energy_assets: MemEnergyAssetRepository,
}

impl MemRepositories {
    /// Create a new repository aggregate over a store.
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self {
            customers: MemCustomerRepository::new(store.clone()),
            projects: MemProjectRepository::new(store.clone()),
            energy_assets: MemEnergyAssetRepository::new(store.clone()),
            store,
        }
    }

    /// The underlying store.
    pub fn store(&self) -> &Arc<MemoryStore> {
        &self.store
    }
}

impl Repositories for MemRepositories {
    fn customers(&self) -> &dyn CustomerRepository {
        &self.customers
    }

    fn projects(&self) -> &dyn ProjectRepository {
        &self.projects
    }

    fn energy_assets(&self) -> &dyn EnergyAssetRepository {
        &self.energy_assets
    }
}
