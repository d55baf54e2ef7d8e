//! Request/response shapes for the JSON surface.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockroom_catalog::{
    Category, CategoryBadge, CategoryFields, CategoryIcon, Product, ProductFields, UnitOfMeasure,
    PRESET_COLORS,
};
use stockroom_core::{CategoryId, ProductId};
use stockroom_infra::ProductListing;
use stockroom_inventory::{
    classify, classify_simple, display_margin, needs_restock, restock_progress, unit_profit,
    DashboardStats, StockReading, StockStatus, Tone,
};

use super::errors::Notification;
use crate::navigation::NavigationCommand;

/// `?q=` free-text search plus the server-side product filter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    #[serde(default)]
    pub active_only: bool,
}

impl ListQuery {
    pub fn query(&self) -> &str {
        self.q.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteQuery {
    #[serde(default)]
    pub confirm: bool,
}

/// A product list row with the reorder-only status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRow {
    #[serde(flatten)]
    pub product: Product,
    pub category: Option<CategoryBadge>,
    pub status: StockStatus,
    pub tone: Tone,
    pub needs_restock: bool,
}

impl From<ProductListing> for ProductRow {
    fn from(listing: ProductListing) -> Self {
        let ProductListing { product, category } = listing;
        let status = classify_simple(product.stock_quantity, product.min_stock_level);
        Self {
            needs_restock: needs_restock(product.stock_quantity, product.min_stock_level),
            status,
            tone: status.tone(),
            category,
            product,
        }
    }
}

/// Everything the product details view shows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDetails {
    #[serde(flatten)]
    pub product: Product,
    pub category: Option<CategoryBadge>,
    pub stock: StockReading,
    pub tone: Tone,
    pub needs_restock: bool,
    /// Percent, one decimal place.
    pub profit_margin: Decimal,
    pub unit_profit: Decimal,
    pub edit: NavigationCommand,
}

impl From<ProductListing> for ProductDetails {
    fn from(listing: ProductListing) -> Self {
        let ProductListing { product, category } = listing;
        let stock = classify(
            product.stock_quantity,
            product.min_stock_level,
            product.max_stock_level,
        );
        Self {
            tone: stock.status.tone(),
            needs_restock: needs_restock(product.stock_quantity, product.min_stock_level),
            profit_margin: display_margin(product.price, product.cost_price),
            unit_profit: unit_profit(product.price, product.cost_price),
            edit: NavigationCommand::OpenProductEditor {
                product_id: Some(product.id),
            },
            stock,
            category,
            product,
        }
    }
}

/// A row of the dashboard's recent-products panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentProduct {
    pub id: ProductId,
    pub name: String,
    pub sku: String,
    pub stock_quantity: u32,
    pub min_stock_level: u32,
    pub category: Option<CategoryBadge>,
    pub status: StockStatus,
    pub tone: Tone,
    pub restock_progress: f64,
    pub needs_restock: bool,
}

impl From<&ProductListing> for RecentProduct {
    fn from(listing: &ProductListing) -> Self {
        let p = &listing.product;
        let status = classify_simple(p.stock_quantity, p.min_stock_level);
        Self {
            id: p.id,
            name: p.name.clone(),
            sku: p.sku.clone(),
            stock_quantity: p.stock_quantity,
            min_stock_level: p.min_stock_level,
            category: listing.category.clone(),
            status,
            tone: status.tone(),
            restock_progress: restock_progress(p.stock_quantity, p.min_stock_level),
            needs_restock: needs_restock(p.stock_quantity, p.min_stock_level),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickAction {
    pub id: String,
    pub label: String,
    pub command: NavigationCommand,
}

impl QuickAction {
    fn new(id: &str, label: &str, command: NavigationCommand) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            command,
        }
    }

    pub fn defaults() -> Vec<Self> {
        use crate::navigation::Page;
        vec![
            QuickAction::new("add-product", "Add product", NavigationCommand::add_product()),
            QuickAction::new("view-all", "View all products", NavigationCommand::view_products()),
            QuickAction::new("reports", "Reports", NavigationCommand::to_page(Page::Reports)),
            QuickAction::new("settings", "Settings", NavigationCommand::to_page(Page::Settings)),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardView {
    pub stats: DashboardStats,
    pub recent_products: Vec<RecentProduct>,
    pub quick_actions: Vec<QuickAction>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRow {
    #[serde(flatten)]
    pub category: Category,
    pub product_count: u64,
}

/// Choices and blank drafts for the product and category forms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormOptions {
    pub units: Vec<UnitOfMeasure>,
    pub icons: Vec<CategoryIcon>,
    pub colors: Vec<String>,
    pub product_defaults: ProductFields,
    pub category_defaults: CategoryFields,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            units: UnitOfMeasure::ALL.to_vec(),
            icons: CategoryIcon::ALL.to_vec(),
            colors: PRESET_COLORS.iter().map(|c| c.to_string()).collect(),
            product_defaults: ProductFields::default(),
            category_defaults: CategoryFields::default(),
        }
    }
}

/// Result of a successful mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mutation<T> {
    pub data: T,
    pub notification: Notification,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<NavigationCommand>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedProduct {
    pub id: ProductId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedCategory {
    pub id: CategoryId,
    /// Products still referencing the removed category.
    pub orphaned_products: u64,
}
