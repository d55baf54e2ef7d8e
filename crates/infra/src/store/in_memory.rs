use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;

use stockroom_catalog::{Category, CategoryFields, Product, ProductFields};
use stockroom_core::{CategoryId, Entity, ProductId};

use super::r#trait::{CatalogStore, ProductFilter, ProductListing, StoreError, StoreResult};

/// In-memory catalog store for tests/dev.
///
/// Mirrors the hosted store's semantics: it assigns ids and timestamps, joins
/// category badges on read and leaves product references dangling when a
/// category is deleted.
#[derive(Debug, Default)]
pub struct InMemoryCatalogStore {
    products: RwLock<HashMap<ProductId, Product>>,
    categories: RwLock<HashMap<CategoryId, Category>>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing records (keyed by their own ids).
    pub fn with_records(
        products: impl IntoIterator<Item = Product>,
        categories: impl IntoIterator<Item = Category>,
    ) -> Self {
        Self {
            products: RwLock::new(products.into_iter().map(|p| (*p.id(), p)).collect()),
            categories: RwLock::new(categories.into_iter().map(|c| (*c.id(), c)).collect()),
        }
    }

    fn join(&self, product: Product) -> StoreResult<ProductListing> {
        let categories = self.categories.read().map_err(|_| StoreError::Poisoned)?;
        let category = product
            .category_id
            .and_then(|id| categories.get(&id))
            .map(Category::badge);
        Ok(ProductListing { product, category })
    }
}

#[async_trait::async_trait]
impl CatalogStore for InMemoryCatalogStore {
    async fn list_products(&self, filter: &ProductFilter) -> StoreResult<Vec<ProductListing>> {
        let mut products: Vec<Product> = {
            let map = self.products.read().map_err(|_| StoreError::Poisoned)?;
            map.values().filter(|p| filter.admits(p)).cloned().collect()
        };
        // Newest first; ids are time-ordered so they break timestamp ties.
        products.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        products.into_iter().map(|p| self.join(p)).collect()
    }

    async fn get_product(&self, id: ProductId) -> StoreResult<ProductListing> {
        let product = {
            let map = self.products.read().map_err(|_| StoreError::Poisoned)?;
            map.get(&id).cloned().ok_or(StoreError::NotFound)?
        };
        self.join(product)
    }

    async fn insert_product(&self, fields: &ProductFields) -> StoreResult<Product> {
        let product = Product::from_fields(ProductId::new(), fields.clone(), Utc::now());
        let mut map = self.products.write().map_err(|_| StoreError::Poisoned)?;
        map.insert(product.id, product.clone());
        Ok(product)
    }

    async fn update_product(&self, id: ProductId, fields: &ProductFields) -> StoreResult<Product> {
        let mut map = self.products.write().map_err(|_| StoreError::Poisoned)?;
        let product = map.get_mut(&id).ok_or(StoreError::NotFound)?;
        product.replace_fields(fields.clone(), Utc::now());
        Ok(product.clone())
    }

    async fn delete_product(&self, id: ProductId) -> StoreResult<()> {
        let mut map = self.products.write().map_err(|_| StoreError::Poisoned)?;
        map.remove(&id);
        Ok(())
    }

    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        let map = self.categories.read().map_err(|_| StoreError::Poisoned)?;
        let mut categories: Vec<Category> = map.values().cloned().collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(categories)
    }

    async fn count_products_by_category(&self, id: CategoryId) -> StoreResult<u64> {
        let map = self.products.read().map_err(|_| StoreError::Poisoned)?;
        Ok(map.values().filter(|p| p.category_id == Some(id)).count() as u64)
    }

    async fn insert_category(&self, fields: &CategoryFields) -> StoreResult<Category> {
        let category = Category::from_fields(CategoryId::new(), fields.clone(), Utc::now());
        let mut map = self.categories.write().map_err(|_| StoreError::Poisoned)?;
        map.insert(category.id, category.clone());
        Ok(category)
    }

    async fn update_category(&self, id: CategoryId, fields: &CategoryFields) -> StoreResult<Category> {
        let mut map = self.categories.write().map_err(|_| StoreError::Poisoned)?;
        let category = map.get_mut(&id).ok_or(StoreError::NotFound)?;
        category.replace_fields(fields.clone());
        Ok(category.clone())
    }

    async fn delete_category(&self, id: CategoryId) -> StoreResult<()> {
        let mut map = self.categories.write().map_err(|_| StoreError::Poisoned)?;
        map.remove(&id);
        Ok(())
    }
}
