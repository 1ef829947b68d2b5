//! Domain models for the energy portfolio.
//!
//! These models are storage-agnostic and represent the canonical
//! form of portfolio data within the domain layer.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::pagination::PageItem;

/// Render a timestamp as ISO-8601 with millisecond precision and a `Z` suffix.
///
/// This is the form used inside cursor sort keys, so it must stay stable.
pub fn iso_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

// =============================================================================
// Enumerations
// =============================================================================

/// Lifecycle status of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    Draft,
    Active,
    Hold,
    Closed,
}

/// Kind of generation or storage equipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnergyAssetType {
    Solar,
    Wind,
    Storage,
    Other,
}

// =============================================================================
// Customers
// =============================================================================

/// A customer owning one or more projects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique identifier (e.g. `cust_1`).
    pub id: String,
    pub name: String,
    pub contact_name: String,
    pub contact_email: String,
    /// ISO 3166 alpha-2 country code.
    pub country: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// Projects
// =============================================================================

/// An energy project belonging to a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier (e.g. `proj_1`).
    pub id: String,
    /// Owning customer.
    pub customer_id: String,
    pub name: String,
    pub status: ProjectStatus,
    /// Sum of installed capacity, in kW.
    pub total_capacity_kw: f64,
    pub city: String,
    pub country: String,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// Energy Assets
// =============================================================================

/// A physical asset (inverter, turbine, battery...) installed on a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyAsset {
    /// Unique identifier (e.g. `asset_1`).
    pub id: String,
    /// Project the asset is installed on.
    pub project_id: String,
    pub asset_type: EnergyAssetType,
    pub name: String,
    /// Nameplate capacity, in kW.
    pub capacity_kw: f64,
    /// Whether the asset is currently in operation.
    pub active: bool,
    pub manufacturer: String,
    pub model: String,
    pub commissioned_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// Pagination capability
// =============================================================================

macro_rules! impl_page_item {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl PageItem for $ty {
                fn created_at(&self) -> DateTime<Utc> {
                    self.created_at
                }

                fn id(&self) -> &str {
                    &self.id
                }
            }
        )+
    };
}

impl_page_item!(Customer, Project, EnergyAsset);
