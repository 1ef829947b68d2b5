//! Shared in-memory tables.

use std::collections::BTreeMap;

use tokio::sync::RwLock;
use tracing::debug;

use portfolio_core::models::{Customer, EnergyAsset, Project};

use crate::seed::SeedData;

#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub customers: BTreeMap<String, Customer>,
    pub projects: BTreeMap<String, Project>,
    pub energy_assets: BTreeMap<String, EnergyAsset>,
}

/// In-memory backing store shared by the repositories.
///
/// Reads take a shared lock and clone out a snapshot, so callers never
/// observe a collection while it is being modified.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub(crate) tables: RwLock<Tables>,
}

/// Row counts, for startup logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreStats {
    pub customers: usize,
    pub projects: usize,
    pub energy_assets: usize,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with seed data.
    pub fn with_seed(seed: SeedData) -> Self {
        let tables = Tables {
            customers: seed
                .customers
                .into_iter()
                .map(|c| (c.id.clone(), c))
                .collect(),
            projects: seed
                .projects
                .into_iter()
                .map(|p| (p.id.clone(), p))
                .collect(),
            energy_assets: seed
                .energy_assets
                .into_iter()
                .map(|a| (a.id.clone(), a))
                .collect(),
        };
        debug!(
            customers = tables.customers.len(),
            projects = tables.projects.len(),
            energy_assets = tables.energy_assets.len(),
            "Store seeded"
        );
        Self {
            tables: RwLock::new(tables),
        }
    }

    pub async fn stats(&self) -> StoreStats {
        let tables = self.tables.read().await;
        StoreStats {
            customers: tables.customers.len(),
            projects: tables.projects.len(),
            energy_assets: tables.energy_assets.len(),
        }
    }

    /// Remove a project and its assets. Returns whether the project existed.
    pub async fn delete_project(&self, id: &str) -> bool {
        let mut tables = self.tables.write().await;
        let existed = tables.projects.remove(id).is_some();
        if existed {
            let before = tables.energy_assets.len();
            tables.energy_assets.retain(|_, a| a.project_id != id);
            debug!(
                project_id = id,
                assets_removed = before - tables.energy_assets.len(),
                "Project deleted"
            );
        }
        existed
    }
}
