//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `sales`: Input records (sellers, products, purchase records)
//! - `stat`: Per-seller accumulation state
//! - `report`: Output leaderboard rows
//! - `diagnostic`: Soft failures raised during accumulation
//! - `error`: Fatal error types

pub mod diagnostic;
pub mod error;
pub mod report;
pub mod sales;
pub mod stat;

pub use diagnostic::Diagnostic;
pub use error::AnalysisError;
pub use report::{round_money, SellerReport, TopProduct};
pub use sales::{
    LineItem, Product, PurchaseRecord, RecordId, SaleLine, SalesData, Seller, SellerId, Sku,
};
pub use stat::{SellerStat, SoldQuantities};
