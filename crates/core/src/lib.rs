//! Core domain layer for the portfolio browser.
//!
//! This crate contains the domain models, port traits (interfaces), the
//! cursor pagination engine and the catalog service. It follows
//! hexagonal architecture principles - this is the innermost layer with
//! no dependencies on infrastructure.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    portfolio (binary)                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │       portfolio-graphql        │      portfolio-storage     │
//! │       (API + HTTP)             │      (in-memory, seed)     │
//! ├────────────────────────────────┴────────────────────────────┤
//! │                   portfolio-core  ← YOU ARE HERE            │
//! │        (models, ports, pagination, services)                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`models`] - Domain models (Customer, Project, EnergyAsset)
//! - [`ports`] - Repository traits and Relay connection types
//! - [`pagination`] - Cursor codec and page builder
//! - [`services`] - Catalog service used by the API layer
//! - [`validation`] - Create-input validation
//! - [`error`] - Domain error types
//! - [`metrics`] - Prometheus metrics definitions
//!
//! # Pagination
//!
//! Every list endpoint goes through [`pagination::paginate`]: the caller
//! supplies a filtered partition, the engine orders it by
//! `(created_at, id)`, resolves the opaque `after` cursor and cuts a
//! window. Cursors are partition-scoped; a cursor replayed against a
//! different partition yields an empty page rather than an error.

pub mod error;
pub mod metrics;
pub mod models;
pub mod pagination;
pub mod ports;
pub mod services;
pub mod validation;
