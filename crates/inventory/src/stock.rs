//! Stock-status classification.
//!
//! Two classifiers exist side by side. [`classify`] looks at both thresholds and
//! is what the product details view shows; [`classify_simple`] only knows the
//! reorder threshold and is what list rows and the dashboard show. They can
//! disagree for a product at or above its capacity threshold.

use serde::{Deserialize, Serialize};

/// Stock status of a single product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    Overstocked,
    InStock,
}

/// Display tone a status is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Destructive,
    Warning,
    Success,
}

impl StockStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "out of stock",
            StockStatus::LowStock => "low stock",
            StockStatus::Overstocked => "overstocked",
            StockStatus::InStock => "in stock",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            StockStatus::OutOfStock => Tone::Destructive,
            StockStatus::LowStock => Tone::Warning,
            StockStatus::Overstocked | StockStatus::InStock => Tone::Success,
        }
    }
}

/// Result of the three-threshold classifier: a status plus a fill fraction in
/// `[0, 100]` for the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StockReading {
    pub status: StockStatus,
    pub fill_percent: f64,
}

/// Classify `quantity` against the reorder (`min`) and capacity (`max`)
/// thresholds.
///
/// Rules are tried in order and the first match wins:
///
/// 1. `quantity == 0` is out of stock (fill 0)
/// 2. `quantity <= min` is low stock (fill fixed at 25)
/// 3. `quantity >= max` is overstocked (fill 100)
/// 4. otherwise in stock, fill `quantity / max * 100` capped at 100
///
/// When `quantity == min == max` rule 2 fires, so the product reads as low stock.
pub fn classify(quantity: u32, min: u32, max: u32) -> StockReading {
    if quantity == 0 {
        return StockReading {
            status: StockStatus::OutOfStock,
            fill_percent: 0.0,
        };
    }
    if quantity <= min {
        return StockReading {
            status: StockStatus::LowStock,
            fill_percent: 25.0,
        };
    }
    if quantity >= max {
        return StockReading {
            status: StockStatus::Overstocked,
            fill_percent: 100.0,
        };
    }

    // Here 0 < quantity < max, so max is non-zero.
    let fill = f64::from(quantity) / f64::from(max) * 100.0;
    StockReading {
        status: StockStatus::InStock,
        fill_percent: fill.min(100.0),
    }
}

/// Classify against the reorder threshold only. Never yields
/// [`StockStatus::Overstocked`].
pub fn classify_simple(quantity: u32, min: u32) -> StockStatus {
    if quantity == 0 {
        StockStatus::OutOfStock
    } else if quantity <= min {
        StockStatus::LowStock
    } else {
        StockStatus::InStock
    }
}

/// Reorder signal: asserted whenever stock is at or below the reorder threshold,
/// including zero.
pub fn needs_restock(quantity: u32, min: u32) -> bool {
    quantity <= min
}

/// Progress toward a comfortable stock level of twice the reorder threshold,
/// in `[0, 100]`. Shown on the dashboard's recent-products rows.
///
/// A zero threshold counts any stock as full and no stock as empty.
pub fn restock_progress(quantity: u32, min: u32) -> f64 {
    if min == 0 {
        return if quantity > 0 { 100.0 } else { 0.0 };
    }
    let target = f64::from(min) * 2.0;
    (f64::from(quantity) / target * 100.0).min(100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_quantity_is_out_of_stock_with_empty_fill() {
        let reading = classify(0, 5, 100);
        assert_eq!(reading.status, StockStatus::OutOfStock);
        assert_eq!(reading.fill_percent, 0.0);
    }

    #[test]
    fn at_reorder_threshold_is_low_stock_with_fixed_fill() {
        let reading = classify(5, 5, 100);
        assert_eq!(reading.status, StockStatus::LowStock);
        assert_eq!(reading.fill_percent, 25.0);
    }

    #[test]
    fn at_capacity_is_overstocked() {
        let reading = classify(100, 5, 100);
        assert_eq!(reading.status, StockStatus::Overstocked);
        assert_eq!(reading.fill_percent, 100.0);
    }

    #[test]
    fn between_thresholds_fill_is_proportional_to_capacity() {
        let reading = classify(25, 5, 100);
        assert_eq!(reading.status, StockStatus::InStock);
        assert_eq!(reading.fill_percent, 25.0);

        let reading = classify(60, 5, 80);
        assert_eq!(reading.fill_percent, 75.0);
    }

    #[test]
    fn equal_thresholds_resolve_to_low_stock_first() {
        assert_eq!(classify(10, 10, 10).status, StockStatus::LowStock);
        assert_eq!(classify(11, 10, 10).status, StockStatus::Overstocked);
    }

    #[test]
    fn zero_capacity_threshold_does_not_divide_by_zero() {
        let reading = classify(3, 0, 0);
        assert_eq!(reading.status, StockStatus::Overstocked);
    }

    #[test]
    fn simple_classifier_ignores_capacity() {
        assert_eq!(classify_simple(0, 5), StockStatus::OutOfStock);
        assert_eq!(classify_simple(5, 5), StockStatus::LowStock);
        assert_eq!(classify_simple(5000, 5), StockStatus::InStock);
        // The two classifiers disagree on an overstocked product.
        assert_eq!(classify(5000, 5, 1000).status, StockStatus::Overstocked);
    }

    #[test]
    fn tones_follow_severity() {
        assert_eq!(StockStatus::OutOfStock.tone(), Tone::Destructive);
        assert_eq!(StockStatus::LowStock.tone(), Tone::Warning);
        assert_eq!(StockStatus::Overstocked.tone(), Tone::Success);
        assert_eq!(StockStatus::InStock.tone(), Tone::Success);
    }

    #[test]
    fn restock_progress_targets_twice_the_threshold() {
        assert_eq!(restock_progress(5, 5), 50.0);
        assert_eq!(restock_progress(10, 5), 100.0);
        assert_eq!(restock_progress(40, 5), 100.0);
        assert_eq!(restock_progress(0, 0), 0.0);
        assert_eq!(restock_progress(1, 0), 100.0);
    }

    #[test]
    fn inverted_thresholds_resolve_by_rule_order() {
        // min 50 above max 10: anything up to 50 is low before capacity is looked at.
        assert_eq!(classify(30, 50, 10).status, StockStatus::LowStock);
        assert_eq!(classify(50, 50, 10).status, StockStatus::LowStock);
        assert_eq!(classify(51, 50, 10).status, StockStatus::Overstocked);
        assert_eq!(classify(51, 50, 10).fill_percent, 100.0);
        assert!(needs_restock(30, 50));
    }

    #[test]
    fn restock_progress_with_huge_threshold_stays_bounded() {
        assert_eq!(restock_progress(u32::MAX, u32::MAX), 50.0);
        assert_eq!(restock_progress(0, u32::MAX), 0.0);
        let p = restock_progress(1, u32::MAX);
        assert!(p > 0.0 && p < 1e-6);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn thresholds() -> impl Strategy<Value = (u32, u32)> {
            (0u32..10_000, 0u32..10_000).prop_map(|(a, b)| (a.min(b), a.max(b)))
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: zero stock is out of stock whatever the thresholds.
            #[test]
            fn zero_is_always_out_of_stock((min, max) in thresholds()) {
                prop_assert_eq!(classify(0, min, max).status, StockStatus::OutOfStock);
                prop_assert_eq!(classify_simple(0, min), StockStatus::OutOfStock);
            }

            /// Property: the fill fraction stays within the progress bar range.
            #[test]
            fn fill_is_bounded(quantity in 0u32..20_000, (min, max) in thresholds()) {
                let reading = classify(quantity, min, max);
                prop_assert!((0.0..=100.0).contains(&reading.fill_percent));
                prop_assert!((0.0..=100.0).contains(&restock_progress(quantity, min)));
            }

            /// Property: the reorder signal tracks the reorder threshold exactly,
            /// and both classifiers report low/out of stock whenever it is raised.
            #[test]
            fn restock_signal_matches_low_statuses(quantity in 0u32..20_000, (min, max) in thresholds()) {
                let low = matches!(
                    classify(quantity, min, max).status,
                    StockStatus::OutOfStock | StockStatus::LowStock
                );
                prop_assert_eq!(needs_restock(quantity, min), low);
                let simple_low = matches!(
                    classify_simple(quantity, min),
                    StockStatus::OutOfStock | StockStatus::LowStock
                );
                prop_assert_eq!(needs_restock(quantity, min), simple_low);
            }

            /// Property: the classifiers only disagree where the full one says
            /// overstocked.
            #[test]
            fn classifiers_disagree_only_on_overstock(quantity in 0u32..20_000, (min, max) in thresholds()) {
                let full = classify(quantity, min, max).status;
                let simple = classify_simple(quantity, min);
                prop_assert_ne!(simple, StockStatus::Overstocked);
                if full != simple {
                    prop_assert_eq!(full, StockStatus::Overstocked);
                    prop_assert_eq!(simple, StockStatus::InStock);
                }
            }
        }
    }
}
