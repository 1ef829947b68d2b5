//! Metrics definitions for the catalog.
//!
//! Metrics are collected using the `metrics` crate and can be exported
//! to Prometheus via `metrics-exporter-prometheus`. Without an installed
//! recorder every call here is a no-op.

use metrics::{counter, describe_counter};

/// Initialize all metric descriptions.
/// Call this once at startup before any metrics are recorded.
pub fn init_metrics() {
    describe_counter!(
        "pages_served_total",
        "Total number of paginated list responses"
    );
    describe_counter!(
        "invalid_cursors_total",
        "Total number of requests rejected for an undecodable cursor"
    );
    describe_counter!(
        "cursor_misses_total",
        "Total number of cursors that resolved to no position (empty page served)"
    );
    describe_counter!(
        "entities_created_total",
        "Total number of customers, projects and assets created"
    );
}

/// Record a served page.
///
/// # Arguments
/// * `collection` - The list endpoint ("customers", "projects", "energy_assets")
pub fn record_page_served(collection: &'static str) {
    counter!("pages_served_total", "collection" => collection).increment(1);
}

/// Record a rejected cursor.
pub fn record_invalid_cursor(collection: &'static str) {
    counter!("invalid_cursors_total", "collection" => collection).increment(1);
}

/// Record a cursor miss.
///
/// # Arguments
/// * `collection` - The list endpoint
/// * `reason` - "partition_mismatch" or "stale_position"
pub fn record_cursor_miss(collection: &'static str, reason: &'static str) {
    counter!("cursor_misses_total", "collection" => collection, "reason" => reason).increment(1);
}

/// Record a created entity.
pub fn record_entity_created(entity: &'static str) {
    counter!("entities_created_total", "entity" => entity).increment(1);
}
