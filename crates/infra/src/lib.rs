//! Infrastructure layer: the data-access boundary to the hosted catalog database.
//!
//! Every read and mutation the dashboard performs goes through [`CatalogStore`].
//! Two implementations are provided: an in-memory store for tests/dev and a
//! REST client for a PostgREST-style hosted database.

pub mod store;

pub use store::{
    CatalogStore, InMemoryCatalogStore, ProductFilter, ProductListing, RestCatalogStore,
    RestConfig, StoreError, StoreResult,
};
