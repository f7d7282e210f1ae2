//! Per-seller accumulation state
//!
//! A [`SellerStat`] is seeded once per input seller, mutated only while
//! purchase records are accumulated, and finalized by the ranker.

use super::report::TopProduct;
use super::sales::{Seller, SellerId, Sku};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Cumulative quantity sold per SKU
///
/// Keys are unique. Iteration yields SKUs in the order they were first
/// recorded, which keeps tie ordering in top-products deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SoldQuantities {
    entries: Vec<(Sku, u64)>,
    positions: HashMap<Sku, usize>,
}

impl SoldQuantities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` to the running total for `sku`, creating it at 0 if absent
    pub fn add(&mut self, sku: &str, quantity: u32) {
        match self.positions.get(sku) {
            Some(&index) => {
                let total = &mut self.entries[index].1;
                *total = total.saturating_add(u64::from(quantity));
            }
            None => {
                self.positions.insert(sku.to_string(), self.entries.len());
                self.entries.push((sku.to_string(), u64::from(quantity)));
            }
        }
    }

    pub fn get(&self, sku: &str) -> Option<u64> {
        self.positions.get(sku).map(|&index| self.entries[index].1)
    }

    /// Number of distinct SKUs
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all quantities
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, quantity)| quantity).sum()
    }

    /// Iterate `(sku, quantity)` pairs in first-recorded order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries
            .iter()
            .map(|(sku, quantity)| (sku.as_str(), *quantity))
    }
}

/// Seller performance accumulated during a single analysis run
#[derive(Debug, Clone, PartialEq)]
pub struct SellerStat {
    /// Seller id copied from the source [`Seller`]
    pub id: SellerId,

    /// First and last name joined by a space
    pub name: String,

    /// Sum of `total_amount` over every purchase record attributed to the seller
    pub revenue: Decimal,

    /// Sum of line-item revenue minus cost over every resolved line item
    pub profit: Decimal,

    /// Number of purchase records attributed to the seller
    pub sales_count: u64,

    pub sold_quantities: SoldQuantities,

    /// Set by the ranker once the final position is known
    pub bonus: Decimal,

    /// Bounded summary of `sold_quantities`, set by the ranker
    pub top_products: Vec<TopProduct>,
}

impl SellerStat {
    /// Seed an empty stat for `seller`
    pub fn new(seller: &Seller) -> Self {
        SellerStat {
            id: seller.id.clone(),
            name: seller.full_name(),
            revenue: Decimal::ZERO,
            profit: Decimal::ZERO,
            sales_count: 0,
            sold_quantities: SoldQuantities::new(),
            bonus: Decimal::ZERO,
            top_products: Vec::new(),
        }
    }
}
