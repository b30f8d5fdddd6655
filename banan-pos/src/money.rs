//! Money calculation using rust_decimal
//!
//! Prices travel as `f64` on the wire; sums are computed as `Decimal` and
//! converted back at the edge.

use rust_decimal::prelude::*;
use shared::models::{OrderItem, Revenue};

/// 2 decimal places, half-up
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal; non-finite input becomes zero
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 after rounding
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// price × quantity of one order line
pub fn line_total(item: &OrderItem) -> Decimal {
    to_decimal(item.price) * Decimal::from(item.quantity)
}

/// Σ price × quantity; an absent list totals zero
pub fn items_total(items: Option<&[OrderItem]>) -> Decimal {
    items
        .unwrap_or_default()
        .iter()
        .map(line_total)
        .sum()
}

/// Sum of a revenue series
pub fn revenue_total(days: &[Revenue]) -> Decimal {
    days.iter().map(|d| to_decimal(d.total_amount)).sum()
}

/// Amount rendered without trailing zeros (`150000`, `12.5`)
pub fn format_amount(value: Decimal) -> String {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
        .to_string()
}
