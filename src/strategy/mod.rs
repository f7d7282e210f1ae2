//! Pluggable calculation strategies
//!
//! The analysis pipeline delegates two calculations to injected strategies:
//!
//! - [`RevenueStrategy`] turns one sold line into a revenue amount
//! - [`BonusStrategy`] turns a seller's final position into a bonus amount
//!
//! Both must be pure: the same inputs always give the same output and no
//! state is shared between calls. That keeps independent analysis runs safe
//! to execute side by side. Any `Fn` with the right signature is a strategy,
//! so plain functions and closures plug in directly.

use crate::types::{Product, SaleLine, SellerStat};
use rust_decimal::Decimal;

pub mod bonus;
pub mod revenue;

pub use bonus::{calculate_bonus_by_profit, BonusByProfit};
pub use revenue::{calculate_simple_revenue, SimpleRevenue};

/// Computes the revenue of a single sold line
pub trait RevenueStrategy: Send + Sync {
    /// Revenue for `line`, whose SKU resolved to `product`
    ///
    /// Inputs are not validated upstream; an out-of-range discount must
    /// produce an out-of-range amount rather than panic, and amounts past the
    /// `Decimal` range should saturate.
    fn revenue(&self, line: &SaleLine, product: &Product) -> Decimal;
}

impl<F> RevenueStrategy for F
where
    F: Fn(&SaleLine, &Product) -> Decimal + Send + Sync,
{
    fn revenue(&self, line: &SaleLine, product: &Product) -> Decimal {
        self(line, product)
    }
}

/// Computes a seller's bonus from its final position
pub trait BonusStrategy: Send + Sync {
    /// Bonus for the seller at zero-based `rank` out of `total` sellers
    fn bonus(&self, rank: usize, total: usize, seller: &SellerStat) -> Decimal;
}

impl<F> BonusStrategy for F
where
    F: Fn(usize, usize, &SellerStat) -> Decimal + Send + Sync,
{
    fn bonus(&self, rank: usize, total: usize, seller: &SellerStat) -> Decimal {
        self(rank, total, seller)
    }
}
