//! Default revenue strategy
//!
//! Revenue of a line is its gross amount reduced by the line discount:
//!
//! ```text
//! revenue = sale_price * quantity * (1 - discount / 100)
//! ```
//!
//! Amounts beyond the `Decimal` range saturate at `Decimal::MAX` / `Decimal::MIN`.

use crate::strategy::RevenueStrategy;
use crate::types::{Product, SaleLine};
use rust_decimal::Decimal;

/// Discounted-gross revenue strategy
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use sales_leaderboard::strategy::{RevenueStrategy, SimpleRevenue};
/// use sales_leaderboard::types::{Product, SaleLine};
///
/// let product = Product {
///     sku: "SKU_001".to_string(),
///     name: "Widget".to_string(),
///     category: "Tools".to_string(),
///     purchase_price: Decimal::from(50),
/// };
/// let line = SaleLine {
///     sale_price: Decimal::from(100),
///     quantity: 2,
///     discount: Decimal::from(10),
/// };
///
/// assert_eq!(SimpleRevenue.revenue(&line, &product), Decimal::from(180));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRevenue;

impl RevenueStrategy for SimpleRevenue {
    fn revenue(&self, line: &SaleLine, product: &Product) -> Decimal {
        calculate_simple_revenue(line, product)
    }
}

/// Plain-function form of [`SimpleRevenue`]
pub fn calculate_simple_revenue(line: &SaleLine, _product: &Product) -> Decimal {
    let discount = Decimal::ONE.saturating_sub(line.discount / Decimal::ONE_HUNDRED);
    line.sale_price
        .saturating_mul(Decimal::from(line.quantity))
        .saturating_mul(discount)
}
