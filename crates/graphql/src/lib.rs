//! GraphQL API for the portfolio browser.
//!
//! Exposes customers, their projects and the projects' energy assets as
//! Relay-style connections over a [`CatalogService`](portfolio_core::services::CatalogService).
//!
//! ```ignore
//! use portfolio_graphql::{ServerConfig, build_schema, serve_with_shutdown};
//!
//! let schema = build_schema(catalog);
//! serve_with_shutdown(schema, ServerConfig::default(), shutdown).await?;
//! ```

mod schema;
mod server;
mod types;

pub use schema::{
    Customer, EnergyAsset, EnergyAssetType, MAX_QUERY_COMPLEXITY, MAX_QUERY_DEPTH, MutationRoot,
    PageInfo, Project, ProjectStatus, QueryRoot, build_schema,
};
pub use server::{ServerConfig, router, serve_with_shutdown};
pub use types::PortfolioSchema;
