//! Input record types for the sales leaderboard
//!
//! This module defines the three source collections (sellers, product
//! catalogue, purchase records) and the bundle that carries them into the
//! analysis pipeline. All of these are immutable once loaded.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Seller identifier
pub type SellerId = String;

/// Stock-keeping unit, the unique identifier for a product
pub type Sku = String;

/// Purchase record (receipt) identifier
pub type RecordId = String;

/// A seller whose sales performance is being ranked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    pub id: SellerId,
    pub first_name: String,
    pub last_name: String,
}

impl Seller {
    /// Display name: first and last name separated by a single space
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Product catalogue entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub sku: Sku,
    pub name: String,
    pub category: String,

    /// Cost of goods for a single unit
    pub purchase_price: Decimal,
}

/// One product line within a purchase record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub sku: Sku,
    pub sale_price: Decimal,
    pub quantity: u32,

    /// Discount percentage, nominally in 0..=100 (not validated)
    pub discount: Decimal,
}

impl LineItem {
    /// The narrowed view of this line handed to a revenue strategy
    pub fn sale_line(&self) -> SaleLine {
        SaleLine {
            sale_price: self.sale_price,
            quantity: self.quantity,
            discount: self.discount,
        }
    }
}

/// Price, quantity and discount of a single sold line
///
/// This is what a [`RevenueStrategy`](crate::strategy::RevenueStrategy)
/// sees; the SKU has already been resolved to a [`Product`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaleLine {
    pub sale_price: Decimal,
    pub quantity: u32,
    pub discount: Decimal,
}

/// One completed transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    #[serde(alias = "receipt_id")]
    pub id: RecordId,
    pub seller_id: SellerId,

    /// Amount actually charged for the whole record
    pub total_amount: Decimal,
    pub items: Vec<LineItem>,
}

/// The input bundle
///
/// Absent collections deserialize as empty so that the pipeline entry check
/// reports "missing" and "empty" the same way.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesData {
    #[serde(default)]
    pub sellers: Vec<Seller>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub purchase_records: Vec<PurchaseRecord>,
}
