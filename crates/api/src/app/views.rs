//! View actions: fetch from the store, run the domain rules, shape the result.
//!
//! Each action makes its own store calls; nothing is cached between actions and
//! a failed call is not retried.

use stockroom_catalog::{CategoryFields, ProductFields};
use stockroom_core::{CategoryId, ProductId};
use stockroom_infra::{CatalogStore, ProductFilter};
use stockroom_inventory::{filter, DashboardStats};

use super::dto::{
    CategoryRow, DashboardView, DeletedCategory, DeletedProduct, ListQuery, Mutation,
    ProductDetails, ProductRow, QuickAction, RecentProduct,
};
use super::errors::*;
use crate::navigation::NavigationCommand;

const RECENT_PRODUCTS: usize = 5;

pub async fn dashboard(store: &dyn CatalogStore) -> Result<DashboardView, ViewError> {
    let products = store
        .list_products(&ProductFilter::default())
        .await
        .map_err(|e| ViewError::fetch(FETCH_DASHBOARD, e))?;
    let categories = store
        .list_categories()
        .await
        .map_err(|e| ViewError::fetch(FETCH_DASHBOARD, e))?;

    let stats = DashboardStats::build(products.iter().map(|l| &l.product), &categories);
    tracing::debug!(
        total_products = stats.total_products,
        low_stock = stats.low_stock_products,
        "dashboard stats built"
    );

    Ok(DashboardView {
        stats,
        recent_products: products
            .iter()
            .take(RECENT_PRODUCTS)
            .map(RecentProduct::from)
            .collect(),
        quick_actions: QuickAction::defaults(),
    })
}

pub async fn list_products(
    store: &dyn CatalogStore,
    query: &ListQuery,
) -> Result<Vec<ProductRow>, ViewError> {
    let product_filter = ProductFilter {
        category_id: query.category_id,
        active_only: query.active_only,
    };
    let listings = store
        .list_products(&product_filter)
        .await
        .map_err(|e| ViewError::fetch(FETCH_PRODUCTS, e))?;

    Ok(filter(query.query(), &listings)
        .into_iter()
        .cloned()
        .map(ProductRow::from)
        .collect())
}

pub async fn product_details(
    store: &dyn CatalogStore,
    id: ProductId,
) -> Result<ProductDetails, ViewError> {
    let listing = store
        .get_product(id)
        .await
        .map_err(|e| ViewError::fetch(FETCH_PRODUCT, e))?;
    Ok(ProductDetails::from(listing))
}

/// Normalize and validate submitted product fields before any store call.
fn check_product(fields: &ProductFields) -> Result<ProductFields, ViewError> {
    let fields = fields.clone().normalized();
    fields.validate()?;
    if fields.has_inverted_thresholds() {
        tracing::warn!(
            min = fields.min_stock_level,
            max = fields.max_stock_level,
            "reorder threshold above capacity threshold"
        );
    }
    Ok(fields)
}

fn check_category(fields: &CategoryFields) -> Result<CategoryFields, ViewError> {
    let fields = fields.clone().normalized();
    fields.validate()?;
    Ok(fields)
}

/// Re-read a saved product so the returned row carries its category badge.
async fn saved_row(store: &dyn CatalogStore, id: ProductId) -> Result<ProductRow, ViewError> {
    let listing = store
        .get_product(id)
        .await
        .map_err(|e| ViewError::fetch(FETCH_PRODUCT, e))?;
    Ok(ProductRow::from(listing))
}

pub async fn create_product(
    store: &dyn CatalogStore,
    fields: &ProductFields,
) -> Result<Mutation<ProductRow>, ViewError> {
    let fields = check_product(fields)?;
    let product = store
        .insert_product(&fields)
        .await
        .map_err(|e| ViewError::mutation(SAVE_PRODUCT, e))?;
    tracing::info!(product_id = %product.id, sku = %product.sku, "product created");

    Ok(Mutation {
        data: saved_row(store, product.id).await?,
        notification: Notification::success("Added", "Product added successfully"),
        next: Some(NavigationCommand::ProductSaved),
    })
}

pub async fn update_product(
    store: &dyn CatalogStore,
    id: ProductId,
    fields: &ProductFields,
) -> Result<Mutation<ProductRow>, ViewError> {
    let fields = check_product(fields)?;
    let product = store
        .update_product(id, &fields)
        .await
        .map_err(|e| ViewError::mutation(SAVE_PRODUCT, e))?;
    tracing::info!(product_id = %product.id, "product updated");

    Ok(Mutation {
        data: saved_row(store, product.id).await?,
        notification: Notification::success("Updated", "Product updated successfully"),
        next: Some(NavigationCommand::ProductSaved),
    })
}

pub async fn delete_product(
    store: &dyn CatalogStore,
    id: ProductId,
    confirmed: bool,
) -> Result<Mutation<DeletedProduct>, ViewError> {
    if !confirmed {
        return Err(ViewError::ConfirmationRequired);
    }
    store
        .delete_product(id)
        .await
        .map_err(|e| ViewError::mutation(DELETE_PRODUCT, e))?;
    tracing::info!(product_id = %id, "product deleted");

    Ok(Mutation {
        data: DeletedProduct { id },
        notification: Notification::success("Deleted", "Product deleted successfully"),
        next: None,
    })
}

/// Categories ordered by name, each with its product count. Counts are fetched
/// one category at a time after the search filter is applied.
pub async fn list_categories(
    store: &dyn CatalogStore,
    query: &ListQuery,
) -> Result<Vec<CategoryRow>, ViewError> {
    let categories = store
        .list_categories()
        .await
        .map_err(|e| ViewError::fetch(FETCH_CATEGORIES, e))?;

    let mut rows = Vec::new();
    for category in filter(query.query(), &categories) {
        let product_count = store
            .count_products_by_category(category.id)
            .await
            .map_err(|e| ViewError::fetch(FETCH_CATEGORIES, e))?;
        rows.push(CategoryRow {
            category: category.clone(),
            product_count,
        });
    }
    Ok(rows)
}

pub async fn create_category(
    store: &dyn CatalogStore,
    fields: &CategoryFields,
) -> Result<Mutation<CategoryRow>, ViewError> {
    let fields = check_category(fields)?;
    let category = store
        .insert_category(&fields)
        .await
        .map_err(|e| ViewError::mutation(SAVE_CATEGORY, e))?;
    tracing::info!(category_id = %category.id, "category created");

    Ok(Mutation {
        data: CategoryRow {
            category,
            product_count: 0,
        },
        notification: Notification::success("Created", "Category created successfully"),
        next: None,
    })
}

pub async fn update_category(
    store: &dyn CatalogStore,
    id: CategoryId,
    fields: &CategoryFields,
) -> Result<Mutation<CategoryRow>, ViewError> {
    let fields = check_category(fields)?;
    let category = store
        .update_category(id, &fields)
        .await
        .map_err(|e| ViewError::mutation(SAVE_CATEGORY, e))?;
    let product_count = store
        .count_products_by_category(id)
        .await
        .map_err(|e| ViewError::fetch(FETCH_CATEGORIES, e))?;
    tracing::info!(category_id = %id, "category updated");

    Ok(Mutation {
        data: CategoryRow {
            category,
            product_count,
        },
        notification: Notification::success("Updated", "Category updated successfully"),
        next: None,
    })
}

/// Delete a category. Products referencing it are left in place with a
/// dangling reference; how many is reported back.
pub async fn delete_category(
    store: &dyn CatalogStore,
    id: CategoryId,
    confirmed: bool,
) -> Result<Mutation<DeletedCategory>, ViewError> {
    if !confirmed {
        return Err(ViewError::ConfirmationRequired);
    }
    let orphaned_products = store
        .count_products_by_category(id)
        .await
        .map_err(|e| ViewError::mutation(DELETE_CATEGORY, e))?;
    store
        .delete_category(id)
        .await
        .map_err(|e| ViewError::mutation(DELETE_CATEGORY, e))?;

    if orphaned_products > 0 {
        tracing::warn!(category_id = %id, orphaned_products, "deleted category still referenced");
    } else {
        tracing::info!(category_id = %id, "category deleted");
    }

    Ok(Mutation {
        data: DeletedCategory {
            id,
            orphaned_products,
        },
        notification: Notification::success("Deleted", "Category deleted successfully"),
        next: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use stockroom_infra::InMemoryCatalogStore;
    use stockroom_inventory::StockStatus;

    fn fields(name: &str, quantity: u32, category_id: Option<CategoryId>) -> ProductFields {
        ProductFields {
            name: name.to_string(),
            sku: format!("SKU-{name}"),
            price: Decimal::from(10),
            stock_quantity: quantity,
            category_id,
            ..ProductFields::default()
        }
    }

    fn category(name: &str) -> CategoryFields {
        CategoryFields {
            name: name.to_string(),
            ..CategoryFields::default()
        }
    }

    #[tokio::test]
    async fn dashboard_shows_five_newest_products_and_stats() {
        let store = InMemoryCatalogStore::new();
        for i in 0..7 {
            store.insert_product(&fields(&format!("P{i}"), i, None)).await.unwrap();
        }
        store.insert_category(&category("Tools")).await.unwrap();

        let view = dashboard(&store).await.unwrap();
        assert_eq!(view.stats.total_products, 7);
        assert_eq!(view.stats.total_categories, 1);
        // Quantities 0..=5 are at or below the default threshold of 5.
        assert_eq!(view.stats.low_stock_products, 6);
        assert_eq!(view.recent_products.len(), 5);
        assert_eq!(view.recent_products[0].name, "P6");
        assert_eq!(view.recent_products[0].status, StockStatus::InStock);
        assert_eq!(view.quick_actions[0].command, NavigationCommand::add_product());
    }

    #[tokio::test]
    async fn product_search_filters_fetched_rows() {
        let store = InMemoryCatalogStore::new();
        store.insert_product(&fields("Blue Widget", 10, None)).await.unwrap();
        store.insert_product(&fields("Red Gadget", 0, None)).await.unwrap();

        let query = ListQuery {
            q: Some("widget".to_string()),
            ..ListQuery::default()
        };
        let rows = list_products(&store, &query).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].product.name, "Blue Widget");

        let all = list_products(&store, &ListQuery::default()).await.unwrap();
        assert_eq!(all.len(), 2);
        assert!(all.iter().any(|r| r.status == StockStatus::OutOfStock));
    }

    #[tokio::test]
    async fn invalid_fields_never_reach_the_store() {
        let store = InMemoryCatalogStore::new();
        let err = create_product(&store, &fields("", 1, None)).await.unwrap_err();
        assert!(matches!(err, ViewError::Validation(_)));
        assert!(store.list_products(&ProductFilter::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn deletes_require_confirmation() {
        let store = InMemoryCatalogStore::new();
        let created = create_product(&store, &fields("Kite", 3, None)).await.unwrap();
        let id = created.data.product.id;

        assert_eq!(
            delete_product(&store, id, false).await.unwrap_err(),
            ViewError::ConfirmationRequired
        );
        delete_product(&store, id, true).await.unwrap();
        assert!(matches!(
            product_details(&store, id).await,
            Err(ViewError::NotFound(FETCH_PRODUCT))
        ));
    }

    #[tokio::test]
    async fn category_delete_reports_orphans() {
        let store = InMemoryCatalogStore::new();
        let toys = create_category(&store, &category("Toys")).await.unwrap().data.category;
        store.insert_product(&fields("Ball", 4, Some(toys.id))).await.unwrap();

        let rows = list_categories(&store, &ListQuery::default()).await.unwrap();
        assert_eq!(rows[0].product_count, 1);

        let deleted = delete_category(&store, toys.id, true).await.unwrap();
        assert_eq!(deleted.data.orphaned_products, 1);
        assert!(list_categories(&store, &ListQuery::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn saved_rows_carry_the_category_badge() {
        let store = InMemoryCatalogStore::new();
        let tools = create_category(&store, &category("Tools")).await.unwrap().data.category;

        let created = create_product(&store, &fields("Saw", 9, Some(tools.id)))
            .await
            .unwrap();
        assert_eq!(created.data.category.as_ref().unwrap().name, "Tools");

        let mut moved = fields("Saw", 9, None);
        moved.description = Some("  ".to_string());
        let updated = update_product(&store, created.data.product.id, &moved)
            .await
            .unwrap();
        assert!(updated.data.category.is_none());
        assert_eq!(updated.data.product.description, None);
    }

    #[tokio::test]
    async fn blank_optional_text_is_cleared_before_the_store() {
        let store = InMemoryCatalogStore::new();
        let mut f = fields("Glue", 2, None);
        f.barcode = Some(" ".to_string());
        let created = create_product(&store, &f).await.unwrap();
        assert_eq!(created.data.product.barcode, None);
    }

    #[tokio::test]
    async fn details_use_the_capacity_aware_reading() {
        let store = InMemoryCatalogStore::new();
        let mut f = fields("Crate", 2000, None);
        f.cost_price = Decimal::from(8);
        let id = store.insert_product(&f).await.unwrap().id;

        let details = product_details(&store, id).await.unwrap();
        assert_eq!(details.stock.status, StockStatus::Overstocked);
        assert_eq!(details.profit_margin, Decimal::from(25));
        assert_eq!(details.unit_profit, Decimal::from(2));
    }
}
