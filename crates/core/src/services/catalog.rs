//! Catalog service.
//!
//! Resolves the three list endpoints (customers, projects of a customer,
//! assets of a project) by fetching a filtered partition from the
//! repositories and handing it to the pagination engine. Also owns
//! entity lookups and creation.

use std::sync::Arc;

use chrono::{DateTime, SubsecRound, Utc};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::error::{DomainError, DomainResult};
use crate::metrics::{
    record_cursor_miss, record_entity_created, record_invalid_cursor, record_page_served,
};
use crate::models::{Customer, EnergyAsset, Project};
use crate::pagination::{PageItem, paginate_with_diagnostics};
use crate::ports::{
    Connection, EnergyAssetFilter, PageLimits, Pagination, ProjectFilter, Repositories,
};
use crate::validation::{
    CreateCustomerInput, CreateEnergyAssetInput, CreateProjectInput, validate_create_customer,
    validate_create_energy_asset, validate_create_project,
};

/// Partition key of the root customer collection.
pub const CUSTOMERS_PARTITION: &str = "customers";

/// Generate a fresh identifier with the given prefix.
fn new_id(prefix: &str) -> String {
    format!("{prefix}_{}", Uuid::new_v4().simple())
}

/// Current time at the millisecond precision timestamps are exposed with.
fn timestamp_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Read and write access to customers, projects and energy assets.
#[derive(Clone)]
pub struct CatalogService {
    repos: Arc<dyn Repositories>,
    limits: PageLimits,
}

impl CatalogService {
    pub fn new(repos: Arc<dyn Repositories>, limits: PageLimits) -> Self {
        Self { repos, limits }
    }

    // -------------------------------------------------------------------------
    // Lookups
    // -------------------------------------------------------------------------

    pub async fn customer(&self, id: &str) -> DomainResult<Customer> {
        self.repos
            .customers()
            .get_customer(id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                entity: "Customer",
                id: id.to_string(),
            })
    }

    pub async fn project(&self, id: &str) -> DomainResult<Project> {
        self.repos
            .projects()
            .get_project(id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                entity: "Project",
                id: id.to_string(),
            })
    }

    pub async fn energy_asset(&self, id: &str) -> DomainResult<EnergyAsset> {
        self.repos
            .energy_assets()
            .get_energy_asset(id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                entity: "EnergyAsset",
                id: id.to_string(),
            })
    }

    // -------------------------------------------------------------------------
    // Lists
    // -------------------------------------------------------------------------

    /// List all customers.
    #[instrument(skip(self, pagination), fields(first = ?pagination.first))]
    pub async fn customers(&self, pagination: &Pagination) -> DomainResult<Connection<Customer>> {
        let items = self.repos.customers().list_customers().await?;
        self.page("customers", items, CUSTOMERS_PARTITION, pagination)
    }

    /// List a customer's projects. The customer id is the partition key.
    #[instrument(skip(self, pagination), fields(first = ?pagination.first))]
    pub async fn projects_by_customer(
        &self,
        customer_id: &str,
        filter: ProjectFilter,
        pagination: &Pagination,
    ) -> DomainResult<Connection<Project>> {
        let items = self
            .repos
            .projects()
            .list_projects_by_customer(customer_id, filter)
            .await?;
        self.page("projects", items, customer_id, pagination)
    }

    /// List a project's energy assets. The project id is the partition key.
    #[instrument(skip(self, pagination), fields(first = ?pagination.first))]
    pub async fn energy_assets_by_project(
        &self,
        project_id: &str,
        filter: EnergyAssetFilter,
        pagination: &Pagination,
    ) -> DomainResult<Connection<EnergyAsset>> {
        let items = self
            .repos
            .energy_assets()
            .list_assets_by_project(project_id, filter)
            .await?;
        self.page("energy_assets", items, project_id, pagination)
    }

    fn page<T: PageItem>(
        &self,
        collection: &'static str,
        items: Vec<T>,
        partition: &str,
        pagination: &Pagination,
    ) -> DomainResult<Connection<T>> {
        let candidates = items.len();
        let (page, miss) = paginate_with_diagnostics(items, partition, pagination, self.limits)
            .inspect_err(|e| {
                if let DomainError::InvalidCursor(reason) = e {
                    record_invalid_cursor(collection);
                    debug!(collection, %reason, "Rejected pagination cursor");
                }
            })?;

        if let Some(miss) = miss {
            record_cursor_miss(collection, miss.reason());
            warn!(
                collection,
                partition,
                reason = miss.reason(),
                detail = ?miss,
                "Cursor matched no item, serving empty page"
            );
        }

        record_page_served(collection);
        debug!(
            collection,
            partition,
            candidates,
            edges = page.edges.len(),
            has_next_page = page.page_info.has_next_page,
            "Page served"
        );

        Ok(page)
    }

    // -------------------------------------------------------------------------
    // Creation
    // -------------------------------------------------------------------------

    pub async fn create_customer(&self, input: CreateCustomerInput) -> DomainResult<Customer> {
        validate_create_customer(&input)?;

        let now = timestamp_now();
        let customer = Customer {
            id: new_id("cust"),
            name: input.name.trim().to_string(),
            contact_name: input.contact_name.unwrap_or_default(),
            contact_email: input.contact_email.unwrap_or_default(),
            country: input.country.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };

        self.repos.customers().insert_customer(&customer).await?;
        record_entity_created("customer");
        info!(id = %customer.id, "Customer created");

        Ok(customer)
    }

    pub async fn create_project(&self, input: CreateProjectInput) -> DomainResult<Project> {
        validate_create_project(&input)?;
        let customer = self.customer(&input.customer_id).await?;

        let now = timestamp_now();
        let project = Project {
            id: new_id("proj"),
            customer_id: customer.id,
            name: input.name.trim().to_string(),
            status: input.status,
            total_capacity_kw: 0.0,
            city: input.city.unwrap_or_default(),
            country: input.country.unwrap_or(customer.country),
            start_date: now,
            end_date: None,
            created_at: now,
            updated_at: now,
        };

        self.repos.projects().insert_project(&project).await?;
        record_entity_created("project");
        info!(id = %project.id, customer_id = %project.customer_id, "Project created");

        Ok(project)
    }

    pub async fn create_energy_asset(
        &self,
        input: CreateEnergyAssetInput,
    ) -> DomainResult<EnergyAsset> {
        validate_create_energy_asset(&input)?;
        let project = self.project(&input.project_id).await?;

        let now = timestamp_now();
        let asset = EnergyAsset {
            id: new_id("asset"),
            project_id: project.id,
            asset_type: input.asset_type,
            name: input.name.unwrap_or_default(),
            capacity_kw: input.capacity_kw,
            active: input.active,
            manufacturer: String::new(),
            model: String::new(),
            commissioned_at: input.active.then_some(now),
            created_at: now,
            updated_at: now,
        };

        self.repos.energy_assets().insert_energy_asset(&asset).await?;
        let project = self
            .repos
            .projects()
            .add_capacity(&asset.project_id, asset.capacity_kw, now)
            .await?;
        record_entity_created("energy_asset");
        info!(
            id = %asset.id,
            project_id = %asset.project_id,
            total_capacity_kw = project.total_capacity_kw,
            "Energy asset created"
        );

        Ok(asset)
    }
}
