mod catalog;

pub use catalog::{CUSTOMERS_PARTITION, CatalogService};
