use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use stockroom_catalog::{Category, CategoryBadge, CategoryFields, Product, ProductFields};
use stockroom_core::{CategoryId, ProductId};
use stockroom_inventory::Searchable;

/// A product row joined with the name/color of its category.
///
/// `category` is `None` both for uncategorized products and for products whose
/// category has since been deleted (the reference is left dangling).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductListing {
    #[serde(flatten)]
    pub product: Product,
    #[serde(default, rename = "categories")]
    pub category: Option<CategoryBadge>,
}

impl Searchable for ProductListing {
    fn search_fields(&self) -> Vec<&str> {
        self.product.search_fields()
    }
}

/// Server-side filter for [`CatalogStore::list_products`].
///
/// Results are always ordered newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub category_id: Option<CategoryId>,
    pub active_only: bool,
}

impl ProductFilter {
    pub fn in_category(category_id: CategoryId) -> Self {
        Self {
            category_id: Some(category_id),
            ..Self::default()
        }
    }

    pub fn admits(&self, product: &Product) -> bool {
        if self.active_only && !product.is_active {
            return false;
        }
        match self.category_id {
            Some(wanted) => product.category_id == Some(wanted),
            None => true,
        }
    }
}

/// Store operation error.
///
/// These are **infrastructure errors** (transport, rejection, decoding). Callers
/// in the API collapse all of them into a generic fetch or mutation failure.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("store rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("failed to decode store response: {0}")]
    Decode(String),

    #[error("store state poisoned")]
    Poisoned,
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Remote catalog store.
///
/// Every view re-fetches what it needs through this trait; there is no cache in
/// front of it and no retry behind it.
#[async_trait::async_trait]
pub trait CatalogStore: Send + Sync {
    /// Products matching `filter`, newest first, joined with their category.
    async fn list_products(&self, filter: &ProductFilter) -> StoreResult<Vec<ProductListing>>;

    /// A single product joined with its category, or [`StoreError::NotFound`].
    async fn get_product(&self, id: ProductId) -> StoreResult<ProductListing>;

    /// Insert a product; the store assigns identifier and timestamps.
    async fn insert_product(&self, fields: &ProductFields) -> StoreResult<Product>;

    /// Replace every editable field of an existing product.
    async fn update_product(&self, id: ProductId, fields: &ProductFields) -> StoreResult<Product>;

    /// Delete a product. Deleting an absent id is not an error.
    async fn delete_product(&self, id: ProductId) -> StoreResult<()>;

    /// All categories ordered by name.
    async fn list_categories(&self) -> StoreResult<Vec<Category>>;

    /// Number of products referencing `id`.
    async fn count_products_by_category(&self, id: CategoryId) -> StoreResult<u64>;

    async fn insert_category(&self, fields: &CategoryFields) -> StoreResult<Category>;

    async fn update_category(&self, id: CategoryId, fields: &CategoryFields) -> StoreResult<Category>;

    /// Delete a category. Products referencing it keep the dangling reference.
    async fn delete_category(&self, id: CategoryId) -> StoreResult<()>;
}

#[async_trait::async_trait]
impl<S> CatalogStore for Arc<S>
where
    S: CatalogStore + ?Sized,
{
    async fn list_products(&self, filter: &ProductFilter) -> StoreResult<Vec<ProductListing>> {
        (**self).list_products(filter).await
    }

    async fn get_product(&self, id: ProductId) -> StoreResult<ProductListing> {
        (**self).get_product(id).await
    }

    async fn insert_product(&self, fields: &ProductFields) -> StoreResult<Product> {
        (**self).insert_product(fields).await
    }

    async fn update_product(&self, id: ProductId, fields: &ProductFields) -> StoreResult<Product> {
        (**self).update_product(id, fields).await
    }

    async fn delete_product(&self, id: ProductId) -> StoreResult<()> {
        (**self).delete_product(id).await
    }

    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        (**self).list_categories().await
    }

    async fn count_products_by_category(&self, id: CategoryId) -> StoreResult<u64> {
        (**self).count_products_by_category(id).await
    }

    async fn insert_category(&self, fields: &CategoryFields) -> StoreResult<Category> {
        (**self).insert_category(fields).await
    }

    async fn update_category(&self, id: CategoryId, fields: &CategoryFields) -> StoreResult<Category> {
        (**self).update_category(id, fields).await
    }

    async fn delete_category(&self, id: CategoryId) -> StoreResult<()> {
        (**self).delete_category(id).await
    }
}
