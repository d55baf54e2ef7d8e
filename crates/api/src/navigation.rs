//! Cross-view navigation.
//!
//! Actions that move the user elsewhere return a [`NavigationCommand`] value.
//! The shell owns a [`Coordinator`] and is the only thing that interprets them.

use serde::{Deserialize, Serialize};

use stockroom_core::ProductId;

/// Top-level pages of the dashboard shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Dashboard,
    Products,
    Categories,
    Reports,
    Settings,
}

/// What to open when navigating to the products page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductsIntent {
    Add,
    View,
}

/// Sub-view of the products page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", content = "product_id", rename_all = "snake_case")]
pub enum ProductsViewMode {
    #[default]
    List,
    Add,
    Edit(ProductId),
    Details(ProductId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum NavigationCommand {
    Navigate {
        page: Page,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        intent: Option<ProductsIntent>,
    },
    /// Open the product form; `None` opens it blank for a new product.
    OpenProductEditor {
        #[serde(default)]
        product_id: Option<ProductId>,
    },
    OpenProductDetails { product_id: ProductId },
    CloseProductForm,
    ProductSaved,
}

impl NavigationCommand {
    pub fn to_page(page: Page) -> Self {
        NavigationCommand::Navigate { page, intent: None }
    }

    pub fn add_product() -> Self {
        NavigationCommand::Navigate {
            page: Page::Products,
            intent: Some(ProductsIntent::Add),
        }
    }

    pub fn view_products() -> Self {
        NavigationCommand::Navigate {
            page: Page::Products,
            intent: Some(ProductsIntent::View),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NavigationState {
    pub page: Page,
    pub products_view: ProductsViewMode,
}

/// Owns the navigation state and applies commands to it.
#[derive(Debug, Clone, Default)]
pub struct Coordinator {
    state: NavigationState,
}

impl Coordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn apply(&mut self, command: NavigationCommand) -> NavigationState {
        let next = match command {
            NavigationCommand::Navigate { page, intent } => NavigationState {
                page,
                products_view: match (page, intent) {
                    (Page::Products, Some(ProductsIntent::Add)) => ProductsViewMode::Add,
                    _ => ProductsViewMode::List,
                },
            },
            NavigationCommand::OpenProductEditor { product_id } => NavigationState {
                page: Page::Products,
                products_view: product_id.map_or(ProductsViewMode::Add, ProductsViewMode::Edit),
            },
            NavigationCommand::OpenProductDetails { product_id } => NavigationState {
                page: Page::Products,
                products_view: ProductsViewMode::Details(product_id),
            },
            NavigationCommand::CloseProductForm | NavigationCommand::ProductSaved => {
                NavigationState {
                    page: Page::Products,
                    products_view: ProductsViewMode::List,
                }
            }
        };

        tracing::debug!(?command, page = ?next.page, view = ?next.products_view, "navigated");
        self.state = next;
        next
    }
}
