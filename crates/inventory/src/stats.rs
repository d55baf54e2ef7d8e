//! Dashboard aggregate statistics.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockroom_catalog::{Category, Product};

use crate::stock::needs_restock;

/// Figures shown on the dashboard cards. Derived per request, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_products: usize,
    pub total_categories: usize,
    /// Products at or below their reorder threshold.
    pub low_stock_products: usize,
    /// `sum(price * stock_quantity)`.
    pub total_value: Decimal,
    /// Mean sell price; zero for an empty catalog.
    pub average_price: Decimal,
}

impl DashboardStats {
    /// Build the statistics from the full product and category collections.
    pub fn build<'a, P, C>(products: P, categories: C) -> Self
    where
        P: IntoIterator<Item = &'a Product>,
        C: IntoIterator<Item = &'a Category>,
    {
        let mut builder = StatsBuilder::default();
        for product in products {
            builder.add_product(product);
        }
        builder.add_categories(categories.into_iter().count());
        builder.finish()
    }
}

/// Single-pass accumulator behind [`DashboardStats::build`].
#[derive(Debug, Clone, Default)]
pub struct StatsBuilder {
    products: usize,
    categories: usize,
    low_stock: usize,
    total_value: Decimal,
    price_sum: Decimal,
}

impl StatsBuilder {
    pub fn add_product(&mut self, product: &Product) -> &mut Self {
        self.products += 1;
        if needs_restock(product.stock_quantity, product.min_stock_level) {
            self.low_stock += 1;
        }
        // Sums saturate at the Decimal bounds.
        let line_value = product.price.saturating_mul(Decimal::from(product.stock_quantity));
        self.total_value = self.total_value.saturating_add(line_value);
        self.price_sum = self.price_sum.saturating_add(product.price);
        self
    }

    pub fn add_categories(&mut self, count: usize) -> &mut Self {
        self.categories += count;
        self
    }

    pub fn finish(&self) -> DashboardStats {
        let average_price = if self.products > 0 {
            self.price_sum / Decimal::from(self.products)
        } else {
            Decimal::ZERO
        };

        DashboardStats {
            total_products: self.products,
            total_categories: self.categories,
            low_stock_products: self.low_stock,
            total_value: self.total_value,
            average_price,
        }
    }
}
