//! Energy asset repository implementation backed by [`MemoryStore`].

use std::sync::Arc;

use async_trait::async_trait;

use portfolio_core::error::{StorageError, StorageResult};
use portfolio_core::models::EnergyAsset;
use portfolio_core::ports::{EnergyAssetFilter, EnergyAssetRepository};

use super::store::MemoryStore;

/// In-memory implementation of EnergyAssetRepository.
pub struct MemEnergyAssetRepository {
    store: Arc<MemoryStore>,
}

impl MemEnergyAssetRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl EnergyAssetRepository for MemEnergyAssetRepository {
    async fn get_energy_asset(&self, id: &str) -> StorageResult<Option<EnergyAsset>> {
        Ok(self.store.tables.read().await.energy_assets.get(id).cloned())
    }

    async fn list_assets_by_project(
        &self,
        project_id: &str,
        filter: EnergyAssetFilter,
    ) -> StorageResult<Vec<EnergyAsset>> {
        let tables = self.store.tables.read().await;
        Ok(tables
            .energy_assets
            .values()
            .filter(|a| a.project_id == project_id && filter.matches(a))
            .cloned()
            .collect())
    }

    async fn insert_energy_asset(&self, asset: &EnergyAsset) -> StorageResult<()> {
        let mut tables = self.store.tables.write().await;
        if tables.energy_assets.contains_key(&asset.id) {
            return Err(StorageError::ConstraintViolation(format!(
                "energy asset {} already exists",
                asset.id
            )));
        }
        tables.energy_assets.insert(asset.id.clone(), asset.clone());
        Ok(())
    }
}
