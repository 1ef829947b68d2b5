//! Project repository implementation backed by [`MemoryStore`].

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use portfolio_core::error::{StorageError, StorageResult};
use portfolio_core::models::Project;
use portfolio_core::ports::{ProjectFilter, ProjectRepository};

use super::store::MemoryStore;

/// In-memory implementation of ProjectRepository.
pub struct MemProjectRepository {
    store: Arc<MemoryStore>,
}

impl MemProjectRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProjectRepository for MemProjectRepository {
    async fn get_project(&self, id: &str) -> StorageResult<Option<Project>> {
        Ok(self.store.tables.read().await.projects.get(id).cloned())
    }

    async fn list_projects_by_customer(
        &self,
        customer_id: &str,
        filter: ProjectFilter,
    ) -> StorageResult<Vec<Project>> {
        let tables = self.store.tables.read().await;
        Ok(tables
            .projects
            .values()
            .filter(|p| p.customer_id == customer_id && filter.matches(p))
            .cloned()
            .collect())
    }

    async fn insert_project(&self, project: &Project) -> StorageResult<()> {
        let mut tables = self.store.tables.write().await;
        if tables.projects.contains_key(&project.id) {
            return Err(StorageError::ConstraintViolation(format!(
                "project {} already exists",
                project.id
            )));
        }
        tables.projects.insert(project.id.clone(), project.clone());
        Ok(())
    }

    async fn add_capacity(
        &self,
        id: &str,
        delta_kw: f64,
        at: DateTime<Utc>,
    ) -> StorageResult<Project> {
        let mut tables = self.store.tables.write().await;
        let project = tables
            .projects
            .get_mut(id)
            .ok_or_else(|| StorageError::NotFound(format!("project {id}")))?;
        project.total_capacity_kw += delta_kw;
        project.updated_at = at;
        Ok(project.clone())
    }
}
