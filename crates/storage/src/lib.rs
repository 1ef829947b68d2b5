//! Storage layer for the portfolio browser.
//!
//! This crate provides in-memory implementations of the repository traits
//! defined in `portfolio-core`, plus the seed-data factory used for local
//! development and tests.
//!
//! # Architecture
//!
//! The storage layer follows the repository pattern:
//!
//! - [`memory::MemoryStore`] - Shared tables
//! - [`memory::MemRepositories`] - Composite repository for all entity types
//! - [`seed`] - Deterministic seed data
//!
//! # Usage
//!
//! ```ignore
//! use portfolio_storage::{MemRepositories, MemoryStore, seed_data};
//!
//! let store = Arc::new(MemoryStore::with_seed(seed_data()));
//! let repositories = Arc::new(MemRepositories::new(store));
//! ```

pub mod memory;
pub mod seed;

pub use memory::{MemRepositories, MemoryStore, StoreStats};
pub use seed::{SeedData, SeedFactory, seed_data};
