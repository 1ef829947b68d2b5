//! Customer repository implementation backed by [`MemoryStore`].

use std::sync::Arc;

use async_trait::async_trait;

use portfolio_core::error::{StorageError, StorageResult};
use portfolio_core::models::Customer;
use portfolio_core::ports::CustomerRepository;

use super::store::MemoryStore;

/// In-memory implementation of CustomerRepository.
pub struct MemCustomerRepository {
    store: Arc<MemoryStore>,
}

impl MemCustomerRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CustomerRepository for MemCustomerRepository {
    async fn get_customer(&self, id: &str) -> StorageResult<Option<Customer>> {
        Ok(self.store.tables.read().await.customers.get(id).cloned())
    }

    async fn list_customers(&self) -> StorageResult<Vec<Customer>> {
        Ok(self
            .store
            .tables
            .read()
            .await
            .customers
            .values()
            .cloned()
            .collect())
    }

    async fn insert_customer(&self, customer: &Customer) -> StorageResult<()> {
        let mut tables = self.store.tables.write().await;
        if tables.customers.contains_key(&customer.id) {
            return Err(StorageError::ConstraintViolation(format!(
                "customer {} already exists",
                customer.id
            )));
        }
        tables.customers.insert(customer.id.clone(), customer.clone());
        Ok(())
    }
}
