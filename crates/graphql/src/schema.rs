//! GraphQL schema definition.
//!
//! This module provides the GraphQL schema for the portfolio browser:
//! customers, their projects, and the projects' energy assets.

use async_graphql::{
    Context, EmptySubscription, ErrorExtensions, ID, InputObject, Object, Result, Schema,
};
use tracing::error;

use portfolio_core::error::{DomainError, ErrorCode};
use portfolio_core::models::iso_timestamp;
use portfolio_core::ports::{Cursor, EnergyAssetFilter, Pagination, ProjectFilter};
use portfolio_core::services::CatalogService;
use portfolio_core::validation::{
    CreateCustomerInput, CreateEnergyAssetInput, CreateProjectInput,
};

use crate::types::PortfolioSchema;

// -----------------------------------------------------------------------------
// Schema Configuration
// -----------------------------------------------------------------------------

/// Maximum query depth to prevent deeply nested queries (DoS protection).
/// Note: GraphQL introspection requires depth ~13, so we use 15 to allow it.
pub const MAX_QUERY_DEPTH: usize = 15;

/// Maximum query complexity score (DoS protection).
/// Each field has a default complexity of 1, nested objects multiply.
pub const MAX_QUERY_COMPLEXITY: usize = 500;

/// Maximum accepted length of an `after` cursor.
const MAX_CURSOR_LENGTH: usize = 512;

// -----------------------------------------------------------------------------
// Schema Builder
// -----------------------------------------------------------------------------

/// Build the schema around a catalog service.
///
/// Includes query depth and complexity limits for DoS protection.
pub fn build_schema(catalog: CatalogService) -> PortfolioSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(catalog)
        .limit_depth(MAX_QUERY_DEPTH)
        .limit_complexity(MAX_QUERY_COMPLEXITY)
        .finish()
}

// -----------------------------------------------------------------------------
// Query Root
// -----------------------------------------------------------------------------

/// Read-only entry points.
#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Get a customer by ID.
    async fn customer<'ctx>(&self, ctx: &Context<'ctx>, id: ID) -> Result<Option<Customer>> {
        let catalog = ctx.data::<CatalogService>()?;

        let customer = catalog.customer(&id).await.map_err(graphql_error)?;
        Ok(Some(Customer::from(customer)))
    }

    /// Get a project by ID.
    async fn project<'ctx>(&self, ctx: &Context<'ctx>, id: ID) -> Result<Option<Project>> {
        let catalog = ctx.data::<CatalogService>()?;

        let project = catalog.project(&id).await.map_err(graphql_error)?;
        Ok(Some(Project::from(project)))
    }

    /// Get an energy asset by ID.
    async fn energy_asset<'ctx>(
        &self,
        ctx: &Context<'ctx>,
        id: ID,
    ) -> Result<Option<EnergyAsset>> {
        let catalog = ctx.data::<CatalogService>()?;

        let asset = catalog.energy_asset(&id).await.map_err(graphql_error)?;
        Ok(Some(EnergyAsset::from(asset)))
    }

    /// List customers with pagination.
    async fn customers<'ctx>(
        &self,
        ctx: &Context<'ctx>,
        first: Option<i32>,
        after: Option<String>,
    ) -> Result<CustomerConnection> {
        let catalog = ctx.data::<CatalogService>()?;
        let pagination = pagination_args(first, after)?;

        let connection = catalog
            .customers(&pagination)
            .await
            .map_err(graphql_error)?;

        Ok(CustomerConnection::from(connection))
    }

    /// List a customer's projects with pagination and an optional status filter.
    async fn projects_by_customer<'ctx>(
        &self,
        ctx: &Context<'ctx>,
        customer_id: ID,
        first: Option<i32>,
        after: Option<String>,
        status: Option<ProjectStatus>,
    ) -> Result<ProjectConnection> {
        let catalog = ctx.data::<CatalogService>()?;
        let pagination = pagination_args(first, after)?;

        let filter = ProjectFilter {
            status: status.map(Into::into),
        };

        let connection = catalog
            .projects_by_customer(&customer_id, filter, &pagination)
            .await
            .map_err(graphql_error)?;

        Ok(ProjectConnection::from(connection))
    }

    /// List a project's energy assets with pagination and an optional type filter.
    async fn energy_assets_by_project<'ctx>(
        &self,
        ctx: &Context<'ctx>,
        project_id: ID,
        first: Option<i32>,
        after: Option<String>,
        #[graphql(name = "type")] asset_type: Option<EnergyAssetType>,
    ) -> Result<EnergyAssetConnection> {
        let catalog = ctx.data::<CatalogService>()?;
        let pagination = pagination_args(first, after)?;

        let filter = EnergyAssetFilter {
            asset_type: asset_type.map(Into::into),
        };

        let connection = catalog
            .energy_assets_by_project(&project_id, filter, &pagination)
            .await
            .map_err(graphql_error)?;

        Ok(EnergyAssetConnection::from(connection))
    }
}

// -----------------------------------------------------------------------------
// Mutation Root
// -----------------------------------------------------------------------------

/// Create operations.
#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a customer.
    async fn create_customer<'ctx>(
        &self,
        ctx: &Context<'ctx>,
        input: NewCustomer,
    ) -> Result<Customer> {
        let catalog = ctx.data::<CatalogService>()?;

        let customer = catalog
            .create_customer(input.into())
            .await
            .map_err(graphql_error)?;
        Ok(Customer::from(customer))
    }

    /// Create a project for an existing customer.
    async fn create_project<'ctx>(
        &self,
        ctx: &Context<'ctx>,
        input: NewProject,
    ) -> Result<Project> {
        let catalog = ctx.data::<CatalogService>()?;

        let project = catalog
            .create_project(input.into())
            .await
            .map_err(graphql_error)?;
        Ok(Project::from(project))
    }

    /// Create an energy asset on an existing project.
    async fn create_energy_asset<'ctx>(
        &self,
        ctx: &Context<'ctx>,
        input: NewEnergyAsset,
    ) -> Result<EnergyAsset> {
        let catalog = ctx.data::<CatalogService>()?;

        let asset = catalog
            .create_energy_asset(input.into())
            .await
            .map_err(graphql_error)?;
        Ok(EnergyAsset::from(asset))
    }
}

// -----------------------------------------------------------------------------
// GraphQL Types
// -----------------------------------------------------------------------------

/// Project lifecycle status.
#[derive(async_graphql::Enum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectStatus {
    Draft,
    Active,
    Hold,
    Closed,
}

impl From<ProjectStatus> for portfolio_core::models::ProjectStatus {
    fn from(status: ProjectStatus) -> Self {
        match status {
            ProjectStatus::Draft => Self::Draft,
            ProjectStatus::Active => Self::Active,
            ProjectStatus::Hold => Self::Hold,
            ProjectStatus::Closed => Self::Closed,
        }
    }
}

impl From<portfolio_core::models::ProjectStatus> for ProjectStatus {
    fn from(status: portfolio_core::models::ProjectStatus) -> Self {
        use portfolio_core::models::ProjectStatus as Core;
        match status {
            Core::Draft => Self::Draft,
            Core::Active => Self::Active,
            Core::Hold => Self::Hold,
            Core::Closed => Self::Closed,
        }
    }
}

/// Energy asset kind.
#[derive(async_graphql::Enum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnergyAssetType {
    Solar,
    Wind,
    Storage,
    Other,
}

impl From<EnergyAssetType> for portfolio_core::models::EnergyAssetType {
    fn from(kind: EnergyAssetType) -> Self {
        match kind {
            EnergyAssetType::Solar => Self::Solar,
            EnergyAssetType::Wind => Self::Wind,
            EnergyAssetType::Storage => Self::Storage,
            EnergyAssetType::Other => Self::Other,
        }
    }
}

impl From<portfolio_core::models::EnergyAssetType> for EnergyAssetType {
    fn from(kind: portfolio_core::models::EnergyAssetType) -> Self {
        use portfolio_core::models::EnergyAssetType as Core;
        match kind {
            Core::Solar => Self::Solar,
            Core::Wind => Self::Wind,
            Core::Storage => Self::Storage,
            Core::Other => Self::Other,
        }
    }
}

/// Customer type.
#[derive(async_graphql::SimpleObject)]
pub struct Customer {
    pub id: ID,
    pub name: String,
    pub contact_name: String,
    pub contact_email: String,
    pub country: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<portfolio_core::models::Customer> for Customer {
    fn from(c: portfolio_core::models::Customer) -> Self {
        Self {
            id: ID(c.id),
            name: c.name,
            contact_name: c.contact_name,
            contact_email: c.contact_email,
            country: c.country,
            created_at: iso_timestamp(&c.created_at),
            updated_at: iso_timestamp(&c.updated_at),
        }
    }
}

/// Project type.
#[derive(async_graphql::SimpleObject)]
pub struct Project {
    pub id: ID,
    pub customer_id: ID,
    pub name: String,
    pub status: ProjectStatus,
    pub total_capacity_kw: f64,
    pub city: String,
    pub country: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<portfolio_core::models::Project> for Project {
    fn from(p: portfolio_core::models::Project) -> Self {
        Self {
            id: ID(p.id),
            customer_id: ID(p.customer_id),
            name: p.name,
            status: p.status.into(),
            total_capacity_kw: p.total_capacity_kw,
            city: p.city,
            country: p.country,
            start_date: iso_timestamp(&p.start_date),
            end_date: p.end_date.as_ref().map(iso_timestamp),
            created_at: iso_timestamp(&p.created_at),
            updated_at: iso_timestamp(&p.updated_at),
        }
    }
}

/// Energy asset type.
#[derive(async_graphql::SimpleObject)]
pub struct EnergyAsset {
    pub id: ID,
    pub project_id: ID,
    #[graphql(name = "type")]
    pub asset_type: EnergyAssetType,
    pub name: String,
    pub capacity_kw: f64,
    pub active: bool,
    pub manufacturer: String,
    pub model: String,
    pub commissioned_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<portfolio_core::models::EnergyAsset> for EnergyAsset {
    fn from(a: portfolio_core::models::EnergyAsset) -> Self {
        Self {
            id: ID(a.id),
            project_id: ID(a.project_id),
            asset_type: a.asset_type.into(),
            name: a.name,
            capacity_kw: a.capacity_kw,
            active: a.active,
            manufacturer: a.manufacturer,
            model: a.model,
            commissioned_at: a.commissioned_at.as_ref().map(iso_timestamp),
            created_at: iso_timestamp(&a.created_at),
            updated_at: iso_timestamp(&a.updated_at),
        }
    }
}

// -----------------------------------------------------------------------------
// Input Types
// -----------------------------------------------------------------------------

#[derive(InputObject)]
pub struct NewCustomer {
    pub name: String,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub country: Option<String>,
}

impl From<NewCustomer> for CreateCustomerInput {
    fn from(input: NewCustomer) -> Self {
        Self {
            name: input.name,
            contact_name: input.contact_name,
            contact_email: input.contact_email,
            country: input.country,
        }
    }
}

#[derive(InputObject)]
pub struct NewProject {
    pub customer_id: ID,
    pub name: String,
    #[graphql(default_with = "ProjectStatus::Draft")]
    pub status: ProjectStatus,
    pub city: Option<String>,
    pub country: Option<String>,
}

impl From<NewProject> for CreateProjectInput {
    fn from(input: NewProject) -> Self {
        Self {
            customer_id: input.customer_id.0,
            name: input.name,
            status: input.status.into(),
            city: input.city,
            country: input.country,
        }
    }
}

#[derive(InputObject)]
pub struct NewEnergyAsset {
    pub project_id: ID,
    #[graphql(name = "type")]
    pub asset_type: EnergyAssetType,
    pub name: Option<String>,
    pub capacity_kw: f64,
    #[graphql(default)]
    pub active: bool,
}

impl From<NewEnergyAsset> for CreateEnergyAssetInput {
    fn from(input: NewEnergyAsset) -> Self {
        Self {
            project_id: input.project_id.0,
            asset_type: input.asset_type.into(),
            name: input.name,
            capacity_kw: input.capacity_kw,
            active: input.active,
        }
    }
}

// -----------------------------------------------------------------------------
// Connection Types (Relay-style pagination)
// -----------------------------------------------------------------------------

#[derive(async_graphql::SimpleObject)]
pub struct PageInfo {
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub start_cursor: Option<String>,
    pub end_cursor: Option<String>,
}

impl From<portfolio_core::ports::PageInfo> for PageInfo {
    fn from(info: portfolio_core::ports::PageInfo) -> Self {
        Self {
            has_next_page: info.has_next_page,
            has_previous_page: info.has_previous_page,
            start_cursor: info.start_cursor.map(|c| c.value),
            end_cursor: info.end_cursor.map(|c| c.value),
        }
    }
}

/// Generate Relay-style connection types (Edge + Connection) with From impl.
macro_rules! define_connection {
    ($node:ty, $core_model:ty, $edge:ident, $connection:ident) => {
        #[derive(async_graphql::SimpleObject)]
        pub struct $edge {
            pub node: $node,
            pub cursor: String,
        }

        #[derive(async_graphql::SimpleObject)]
        pub struct $connection {
            pub edges: Vec<$edge>,
            pub page_info: PageInfo,
        }

        impl From<portfolio_core::ports::Connection<$core_model>> for $connection {
            fn from(conn: portfolio_core::ports::Connection<$core_model>) -> Self {
                Self {
                    edges: conn
                        .edges
                        .into_iter()
                        .map(|e| $edge {
                            node: <$node>::from(e.node),
                            cursor: e.cursor.value,
                        })
                        .collect(),
                    page_info: PageInfo::from(conn.page_info),
                }
            }
        }
    };
}

define_connection!(Customer, portfolio_core::models::Customer, CustomerEdge, CustomerConnection);
define_connection!(Project, portfolio_core::models::Project, ProjectEdge, ProjectConnection);
define_connection!(
    EnergyAsset,
    portfolio_core::models::EnergyAsset,
    EnergyAssetEdge,
    EnergyAssetConnection
);

// -----------------------------------------------------------------------------
// Helpers & Validation
// -----------------------------------------------------------------------------

/// Turn raw connection arguments into engine pagination.
///
/// Page size clamping happens in the engine; only oversized cursors are
/// rejected here.
fn pagination_args(first: Option<i32>, after: Option<String>) -> Result<Pagination> {
    if after.as_ref().is_some_and(|c| c.len() > MAX_CURSOR_LENGTH) {
        return Err(graphql_error(DomainError::InvalidCursor(format!(
            "cursor too long: maximum {} characters allowed",
            MAX_CURSOR_LENGTH
        ))));
    }

    Ok(Pagination {
        first,
        after: after.map(|value| Cursor { value }),
    })
}

/// Map a domain error to a GraphQL error carrying `extensions.code`.
///
/// Storage failures are logged and surfaced with a generic message.
fn graphql_error(err: DomainError) -> async_graphql::Error {
    let code = err.code();

    let message = if code == ErrorCode::SystemError {
        error!(error = %err, "Request failed");
        "Internal server error".to_string()
    } else {
        err.to_string()
    };

    let violations = match &err {
        DomainError::Validation(v) => Some(v.clone()),
        _ => None,
    };

    async_graphql::Error::new(message).extend_with(|_, ext| {
        ext.set("code", code.as_str());
        if let Some(violations) = violations {
            ext.set("violations", violations);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_graphql::{Request, Variables};
    use serde_json::{Value, json};

    use portfolio_core::ports::PageLimits;
    use portfolio_storage::{MemRepositories, MemoryStore, seed_data};

    fn schema() -> PortfolioSchema {
        let store = Arc::new(MemoryStore::with_seed(seed_data()));
        let repos = Arc::new(MemRepositories::new(store));
        build_schema(CatalogService::new(repos, PageLimits::default()))
    }

    async fn run(schema: &PortfolioSchema, query: &str, vars: Value) -> Value {
        let request = Request::new(query).variables(Variables::from_json(vars));
        serde_json::to_value(schema.execute(request).await).unwrap()
    }

    const CUSTOMERS: &str = r#"
        query ($first: Int, $after: String) {
          customers(first: $first, after: $after) {
            edges { cursor node { id name createdAt } }
            pageInfo { endCursor hasNextPage }
          }
        }
    "#;

    const PROJECTS: &str = r#"
        query ($customerId: ID!, $first: Int, $after: String, $status: ProjectStatus) {
          projectsByCustomer(
            customerId: $customerId, first: $first, after: $after, status: $status
          ) {
            edges { cursor node { id status customerId createdAt } }
            pageInfo { endCursor hasNextPage }
          }
        }
    "#;

    const ASSETS: &str = r#"
        query ($projectId: ID!, $first: Int, $after: String, $type: EnergyAssetType) {
          energyAssetsByProject(projectId: $projectId, first: $first, after: $after, type: $type) {
            edges { cursor node { id type projectId capacityKw active createdAt } }
            pageInfo { endCursor hasNextPage }
          }
        }
    "#;

    #[tokio::test]
    async fn test_customers_connection() {
        let schema = schema();

        let res = run(&schema, CUSTOMERS, json!({ "first": 1 })).await;
        assert!(res.get("errors").is_none());
        let conn = &res["data"]["customers"];
        assert_eq!(conn["edges"].as_array().unwrap().len(), 1);
        assert_eq!(conn["edges"][0]["node"]["id"], "cust_1");
        assert_eq!(conn["edges"][0]["node"]["createdAt"], "2024-01-01T00:00:00.000Z");
        assert_eq!(conn["pageInfo"]["hasNextPage"], true);
        let cursor = conn["pageInfo"]["endCursor"].clone();
        assert!(cursor.is_string());

        let res = run(&schema, CUSTOMERS, json!({ "first": 10, "after": cursor })).await;
        assert!(res.get("errors").is_none());
        let conn = &res["data"]["customers"];
        assert_eq!(conn["edges"][0]["node"]["id"], "cust_2");
        assert_eq!(conn["pageInfo"]["hasNextPage"], false);
    }

    // Test critique: client inexistant -> null + code NOT_FOUND
    #[tokio::test]
    async fn test_customer_not_found() {
        let res = run(
            &schema(),
            "query ($id: ID!) { customer(id: $id) { id } }",
            json!({ "id": "does_not_exist" }),
        )
        .await;

        assert_eq!(res["errors"][0]["message"], "Customer not found");
        assert_eq!(res["errors"][0]["extensions"]["code"], "NOT_FOUND");
        assert_eq!(res["data"]["customer"], Value::Null);
    }

    #[tokio::test]
    async fn test_projects_by_customer_with_status_filter() {
        let schema = schema();

        let res = run(
            &schema,
            PROJECTS,
            json!({ "customerId": "cust_1", "first": 1, "status": "ACTIVE" }),
        )
        .await;
        let conn = &res["data"]["projectsByCustomer"];
        assert_eq!(conn["edges"].as_array().unwrap().len(), 1);
        assert_eq!(conn["edges"][0]["node"]["status"], "ACTIVE");
        assert_eq!(conn["pageInfo"]["hasNextPage"], false);

        // Sans filtre: deux projets, pagination un par un
        let res = run(&schema, PROJECTS, json!({ "customerId": "cust_1", "first": 1 })).await;
        let conn = &res["data"]["projectsByCustomer"];
        assert_eq!(conn["edges"].as_array().unwrap().len(), 1);
        assert_eq!(conn["pageInfo"]["hasNextPage"], true);
        let cursor = conn["pageInfo"]["endCursor"].clone();

        let res = run(
            &schema,
            PROJECTS,
            json!({ "customerId": "cust_1", "first": 10, "after": cursor }),
        )
        .await;
        let conn = &res["data"]["projectsByCustomer"];
        assert_eq!(conn["edges"].as_array().unwrap().len(), 1);
        assert_eq!(conn["edges"][0]["node"]["status"], "DRAFT");
        assert_eq!(conn["pageInfo"]["hasNextPage"], false);
    }

    #[tokio::test]
    async fn test_energy_assets_by_project_with_type_filter() {
        let schema = schema();

        let res = run(
            &schema,
            ASSETS,
            json!({ "projectId": "proj_3", "first": 1, "type": "SOLAR" }),
        )
        .await;
        let conn = &res["data"]["energyAssetsByProject"];
        assert_eq!(conn["edges"].as_array().unwrap().len(), 1);
        assert_eq!(conn["edges"][0]["node"]["type"], "SOLAR");
        assert_eq!(conn["pageInfo"]["hasNextPage"], true);
        let cursor = conn["pageInfo"]["endCursor"].clone();

        let res = run(
            &schema,
            ASSETS,
            json!({ "projectId": "proj_3", "first": 10, "after": cursor, "type": "SOLAR" }),
        )
        .await;
        let conn = &res["data"]["energyAssetsByProject"];
        assert_eq!(conn["edges"].as_array().unwrap().len(), 1);
        assert_eq!(conn["edges"][0]["node"]["capacityKw"], 180.0);
        assert_eq!(conn["pageInfo"]["hasNextPage"], false);

        let res = run(
            &schema,
            ASSETS,
            json!({ "projectId": "proj_4", "type": "STORAGE" }),
        )
        .await;
        let conn = &res["data"]["energyAssetsByProject"];
        assert_eq!(conn["edges"].as_array().unwrap().len(), 1);
        assert_eq!(conn["edges"][0]["node"]["type"], "STORAGE");
    }

    #[tokio::test]
    async fn test_malformed_cursor_is_validation_error() {
        let res = run(
            &schema(),
            CUSTOMERS,
            json!({ "first": 1, "after": "not-a-cursor" }),
        )
        .await;
        assert_eq!(res["errors"][0]["extensions"]["code"], "VALIDATION_ERROR");

        let res = run(
            &schema(),
            CUSTOMERS,
            json!({ "first": 1, "after": "a".repeat(MAX_CURSOR_LENGTH + 1) }),
        )
        .await;
        assert_eq!(res["errors"][0]["extensions"]["code"], "VALIDATION_ERROR");
    }

    // Un curseur de projets réutilisé sur un autre client: page vide, pas d'erreur
    #[tokio::test]
    async fn test_cursor_replayed_on_other_partition() {
        let schema = schema();
        let res = run(&schema, PROJECTS, json!({ "customerId": "cust_1", "first": 1 })).await;
        let cursor = res["data"]["projectsByCustomer"]["pageInfo"]["endCursor"].clone();

        let res = run(
            &schema,
            PROJECTS,
            json!({ "customerId": "cust_2", "after": cursor }),
        )
        .await;
        assert!(res.get("errors").is_none());
        let conn = &res["data"]["projectsByCustomer"];
        assert_eq!(conn["edges"], json!([]));
        assert_eq!(conn["pageInfo"]["endCursor"], Value::Null);
        assert_eq!(conn["pageInfo"]["hasNextPage"], false);
    }

    #[tokio::test]
    async fn test_create_mutations() {
        let schema = schema();

        let res = run(
            &schema,
            r#"mutation {
                createProject(input: { customerId: "cust_2", name: "Offshore Wind", status: ACTIVE }) {
                    id customerId status totalCapacityKw
                }
            }"#,
            json!({}),
        )
        .await;
        assert!(res.get("errors").is_none(), "{res}");
        let project_id = res["data"]["createProject"]["id"].clone();
        assert_eq!(res["data"]["createProject"]["status"], "ACTIVE");
        assert_eq!(res["data"]["createProject"]["totalCapacityKw"], 0.0);

        let res = run(
            &schema,
            r#"mutation ($p: ID!) {
                createEnergyAsset(input: { projectId: $p, type: WIND, capacityKw: 3000 }) {
                    id type active
                }
            }"#,
            json!({ "p": project_id }),
        )
        .await;
        assert!(res.get("errors").is_none(), "{res}");
        assert_eq!(res["data"]["createEnergyAsset"]["active"], false);

        let res = run(&schema, PROJECTS, json!({ "customerId": "cust_2" })).await;
        let edges = res["data"]["projectsByCustomer"]["edges"].as_array().unwrap();
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[1]["node"]["id"], project_id);

        // La capacité du projet inclut le nouvel actif
        let res = run(
            &schema,
            "query ($id: ID!) { project(id: $id) { totalCapacityKw } }",
            json!({ "id": project_id }),
        )
        .await;
        assert_eq!(res["data"]["project"]["totalCapacityKw"], 3000.0);
    }

    #[tokio::test]
    async fn test_create_validation_errors() {
        let res = run(
            &schema(),
            r#"mutation {
                createEnergyAsset(input: { projectId: "", type: SOLAR, capacityKw: -1 }) { id }
            }"#,
            json!({}),
        )
        .await;
        let err = &res["errors"][0];
        assert_eq!(err["extensions"]["code"], "VALIDATION_ERROR");
        assert_eq!(
            err["extensions"]["violations"],
            json!(["projectId is required", "capacityKw must be a positive number"])
        );
    }
}
