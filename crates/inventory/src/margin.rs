//! Profit-margin arithmetic.

use rust_decimal::Decimal;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Margin over cost, in percent: `(price - cost) / cost * 100`.
///
/// A zero cost yields 0 rather than dividing by zero. That also hides free goods
/// and negative costs, which the form never produces. Results too large for a
/// `Decimal` also collapse to 0.
pub fn profit_margin(price: Decimal, cost: Decimal) -> Decimal {
    if cost.is_zero() {
        return Decimal::ZERO;
    }
    price
        .checked_sub(cost)
        .and_then(|profit| profit.checked_div(cost))
        .and_then(|ratio| ratio.checked_mul(HUNDRED))
        .unwrap_or(Decimal::ZERO)
}

/// Margin rounded to one decimal place, as the details view prints it.
pub fn display_margin(price: Decimal, cost: Decimal) -> Decimal {
    profit_margin(price, cost).round_dp(1)
}

/// Profit per unit sold, saturating at the `Decimal` bounds.
pub fn unit_profit(price: Decimal, cost: Decimal) -> Decimal {
    price.saturating_sub(cost)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn margin_over_cost() {
        assert_eq!(profit_margin(dec("150"), dec("100")), dec("50"));
        assert_eq!(profit_margin(dec("100"), dec("100")), Decimal::ZERO);
        assert_eq!(profit_margin(dec("80"), dec("100")), dec("-20"));
    }

    #[test]
    fn zero_cost_yields_zero_margin() {
        assert_eq!(profit_margin(dec("150"), Decimal::ZERO), Decimal::ZERO);
        assert_eq!(profit_margin(Decimal::ZERO, Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn display_margin_rounds_to_one_place() {
        // (19.99 - 12.50) / 12.50 * 100 = 59.92
        assert_eq!(display_margin(dec("19.99"), dec("12.50")), dec("59.9"));
    }

    #[test]
    fn extreme_values_saturate() {
        assert_eq!(unit_profit(Decimal::MAX, Decimal::MIN), Decimal::MAX);
        assert_eq!(unit_profit(Decimal::MIN, Decimal::MAX), Decimal::MIN);
        assert_eq!(profit_margin(Decimal::MAX, dec("0.01")), Decimal::ZERO);
    }

    #[test]
    fn unit_profit_is_the_price_difference() {
        assert_eq!(unit_profit(dec("19.99"), dec("12.50")), dec("7.49"));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: any price over a zero cost has zero margin.
            #[test]
            fn zero_cost_is_always_zero(cents in 0i64..100_000_000) {
                prop_assert_eq!(profit_margin(Decimal::new(cents, 2), Decimal::ZERO), Decimal::ZERO);
            }

            /// Property: selling at cost is a zero margin.
            #[test]
            fn selling_at_cost_is_zero(cents in 1i64..100_000_000) {
                let cost = Decimal::new(cents, 2);
                prop_assert_eq!(profit_margin(cost, cost), Decimal::ZERO);
            }
        }
    }
}
