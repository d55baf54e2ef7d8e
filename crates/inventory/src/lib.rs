//! Inventory domain rules.
//!
//! Pure functions over already-fetched catalog records: stock-status
//! classification, profit margin, the dashboard aggregate and the free-text
//! search predicate. Nothing here performs IO or keeps state between calls.

pub mod margin;
pub mod search;
pub mod stats;
pub mod stock;

pub use margin::{display_margin, profit_margin, unit_profit};
pub use search::{filter, matches, Searchable};
pub use stats::{DashboardStats, StatsBuilder};
pub use stock::{
    classify, classify_simple, needs_restock, restock_progress, StockReading, StockStatus, Tone,
};
