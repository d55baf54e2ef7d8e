//! Catalog data-access boundary.
//!
//! This module defines the collection operations the dashboard consumes
//! (list/get/insert/update/delete/count with filter and join) without making any
//! storage assumptions. Filtering, joins and counts are the store's job; the
//! domain rules only ever see the records that come back.

pub mod in_memory;
pub mod rest;
pub mod r#trait;

pub use in_memory::InMemoryCatalogStore;
pub use r#trait::{CatalogStore, ProductFilter, ProductListing, StoreError, StoreResult};
pub use rest::{RestCatalogStore, RestConfig};
