//! GraphQL type definitions.

use async_graphql::{EmptySubscription, Schema};

use crate::schema::{MutationRoot, QueryRoot};

/// The portfolio browser schema.
pub type PortfolioSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;
