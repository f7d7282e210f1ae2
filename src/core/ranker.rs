//! Ranking, bonus assignment and top-products derivation
//!
//! Sellers are ordered by a fixed comparator:
//!
//! 1. profit, descending
//! 2. revenue, descending
//! 3. sales count, descending
//! 4. name, ascending, by locale collation (see [`NameOrder`])
//!
//! The sort is stable, so sellers equal on every key keep their input order.
//! Each seller then receives a bonus from the injected strategy and has its
//! sold quantities reduced to a bounded top-products list.

use crate::core::indexer::ProductIndex;
use crate::strategy::BonusStrategy;
use crate::types::{SellerReport, SellerStat, SoldQuantities, TopProduct};
use icu_collator::{Collator, CollatorOptions};
use icu_provider::DataLocale;
use std::cmp::Ordering;
use tracing::warn;

/// Default number of entries kept in a seller's top products
pub const DEFAULT_TOP_PRODUCTS_LIMIT: usize = 10;

/// Category used when a sold SKU has no catalogue entry
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Case-sensitive locale ordering of seller names
///
/// Uses the root collation at tertiary strength: letters compare by alphabet
/// before case, and a lowercase name sorts before the same name capitalized.
/// If collation data cannot be loaded, names fall back to code-point order.
pub struct NameOrder {
    collator: Option<Collator>,
}

impl NameOrder {
    pub fn new() -> Self {
        let collator = match Collator::try_new(&DataLocale::default(), CollatorOptions::new()) {
            Ok(collator) => Some(collator),
            Err(error) => {
                warn!(%error, "Collation data unavailable, ordering names by code point");
                None
            }
        };
        NameOrder { collator }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match &self.collator {
            Some(collator) => collator.compare(a, b),
            None => a.cmp(b),
        }
    }
}

impl Default for NameOrder {
    fn default() -> Self {
        Self::new()
    }
}

/// Leaderboard order between two accumulated sellers
pub fn compare_sellers(a: &SellerStat, b: &SellerStat, names: &NameOrder) -> Ordering {
    b.profit
        .cmp(&a.profit)
        .then_with(|| b.revenue.cmp(&a.revenue))
        .then_with(|| b.sales_count.cmp(&a.sales_count))
        .then_with(|| names.compare(&a.name, &b.name))
}

/// Reduce sold quantities to the `limit` best-selling products
///
/// Products are ordered by quantity, descending; equal quantities keep the
/// order in which the SKUs were first sold. SKUs missing from the catalogue
/// fall back to the SKU as name and [`UNKNOWN_CATEGORY`].
pub fn top_products(
    sold: &SoldQuantities,
    products: &ProductIndex<'_>,
    limit: usize,
) -> Vec<TopProduct> {
    let mut top: Vec<TopProduct> = sold
        .iter()
        .map(|(sku, quantity)| {
            let (product_name, category) = match products.get(sku) {
                Some(product) => (product.name.clone(), product.category.clone()),
                None => (sku.to_string(), UNKNOWN_CATEGORY.to_string()),
            };
            TopProduct {
                sku: sku.to_string(),
                quantity,
                product_name,
                category,
            }
        })
        .collect();

    top.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    top.truncate(limit);
    top
}

/// Final stage of the pipeline
pub struct Ranker<'i, 'a> {
    products: &'i ProductIndex<'a>,
    bonus: &'i dyn BonusStrategy,
    top_products_limit: usize,
    names: NameOrder,
}

impl<'i, 'a> Ranker<'i, 'a> {
    pub fn new(
        products: &'i ProductIndex<'a>,
        bonus: &'i dyn BonusStrategy,
        top_products_limit: usize,
    ) -> Self {
        Ranker {
            products,
            bonus,
            top_products_limit,
            names: NameOrder::new(),
        }
    }

    /// Sort, finalize and convert every stat into a report
    pub fn rank(&self, mut stats: Vec<SellerStat>) -> Vec<SellerReport> {
        stats.sort_by(|a, b| compare_sellers(a, b, &self.names));

        let total = stats.len();
        stats
            .into_iter()
            .enumerate()
            .map(|(rank, mut stat)| {
                stat.bonus = self.bonus.bonus(rank, total, &stat);
                stat.top_products =
                    top_products(&stat.sold_quantities, self.products, self.top_products_limit);
                SellerReport::from(stat)
            })
            .collect()
    }
}
