//! Output records of the leaderboard

use super::sales::{SellerId, Sku};
use super::stat::SellerStat;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Decimal places kept for money values in reports
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// One entry of a seller's best-selling products
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopProduct {
    pub sku: Sku,
    pub quantity: u64,
    pub product_name: String,
    pub category: String,
}

/// Final, immutable leaderboard row for one seller
///
/// Money fields are rounded to two decimal places and serialize as JSON
/// numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerReport {
    pub seller_id: SellerId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub revenue: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub profit: Decimal,
    pub sales_count: u64,
    pub top_products: Vec<TopProduct>,
    #[serde(with = "rust_decimal::serde::float")]
    pub bonus: Decimal,
}

/// Round a money amount half away from zero
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

impl From<SellerStat> for SellerReport {
    fn from(stat: SellerStat) -> Self {
        SellerReport {
            seller_id: stat.id,
            name: stat.name,
            revenue: round_money(stat.revenue),
            profit: round_money(stat.profit),
            sales_count: stat.sales_count,
            top_products: stat.top_products,
            bonus: round_money(stat.bonus),
        }
    }
}
