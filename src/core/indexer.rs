//! Lookup structures for sellers and products
//!
//! The indexer seeds one [`SellerStat`] per input seller and builds two
//! mappings over the input collections:
//!
//! - seller id -> position of its stat in the seeded collection
//! - SKU -> product
//!
//! # Duplicate Handling
//!
//! Keys are expected to be unique. When they are not, the last occurrence
//! wins and a [`Diagnostic`] is reported for each overwritten key. The stat
//! seeded for an overwritten seller stays in the collection but never
//! receives purchase records.

use crate::core::traits::DiagnosticSink;
use crate::types::{Diagnostic, Product, Seller, SellerStat};
use std::collections::HashMap;

/// Seed one empty stat per seller, in input order
pub fn seed_seller_stats(sellers: &[Seller]) -> Vec<SellerStat> {
    sellers.iter().map(SellerStat::new).collect()
}

/// Seller id -> position in the seeded stat collection
#[derive(Debug, Clone, Default)]
pub struct SellerIndex<'a> {
    positions: HashMap<&'a str, usize>,
}

impl<'a> SellerIndex<'a> {
    /// Index `sellers`; positions match [`seed_seller_stats`] over the same slice
    pub fn build(sellers: &'a [Seller], sink: &mut dyn DiagnosticSink) -> Self {
        let mut positions = HashMap::with_capacity(sellers.len());
        for (position, seller) in sellers.iter().enumerate() {
            if positions.insert(seller.id.as_str(), position).is_some() {
                sink.report(Diagnostic::duplicate_seller(&seller.id));
            }
        }
        SellerIndex { positions }
    }

    pub fn position(&self, seller_id: &str) -> Option<usize> {
        self.positions.get(seller_id).copied()
    }

    /// Number of distinct seller ids
    pub(crate) fn len(&self) -> usize {
        self.positions.len()
    }
}

/// SKU -> product
#[derive(Debug, Clone, Default)]
pub struct ProductIndex<'a> {
    products: HashMap<&'a str, &'a Product>,
}

impl<'a> ProductIndex<'a> {
    pub fn build(products: &'a [Product], sink: &mut dyn DiagnosticSink) -> Self {
        let mut index = HashMap::with_capacity(products.len());
        for product in products {
            if index.insert(product.sku.as_str(), product).is_some() {
                sink.report(Diagnostic::duplicate_product(&product.sku));
            }
        }
        ProductIndex { products: index }
    }

    pub fn get(&self, sku: &str) -> Option<&'a Product> {
        self.products.get(sku).copied()
    }

    /// Number of distinct SKUs
    pub(crate) fn len(&self) -> usize {
        self.products.len()
    }
}
