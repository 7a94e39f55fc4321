//! Pricing Calculator
//!
//! Subtotal, profit and total for a quote.

use super::item::Item;

/// Computed amounts for one quote
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    pub subtotal: f64,
    pub profit: f64,
    pub total: f64,
}

impl Totals {
    /// Sum of the totals of every quote in a list
    pub fn of_collection(items: &[Item]) -> Self {
        items.iter().map(compute_totals).fold(Totals::default(), |acc, t| Totals {
            subtotal: acc.subtotal + t.subtotal,
            profit: acc.profit + t.profit,
            total: acc.total + t.total,
        })
    }
}

/// Negative and non-finite amounts count as zero
fn clamp(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Compute the totals of a quote. Never fails.
pub fn compute_totals(item: &Item) -> Totals {
    let subtotal = clamp(item.quantity) * clamp(item.unit_price)
        + clamp(item.setup_fee)
        + clamp(item.shipping);
    let profit = subtotal * item.profit_rate.as_fraction();
    Totals {
        subtotal,
        profit,
        total: subtotal + profit,
    }
}
