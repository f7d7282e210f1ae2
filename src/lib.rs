//! Sales Leaderboard Library
//! # Overview
//!
//! This library aggregates per-seller sales performance from a seller list, a
//! product catalogue and purchase records into a ranked leaderboard with
//! revenue, profit, bonus and best-selling products for every seller.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (input records, seller stats, reports, errors)
//! - [`strategy`] - Pluggable revenue and bonus calculations
//! - [`core`] - The analysis pipeline:
//!   - [`core::indexer`] - Seller and product lookup tables
//!   - [`core::accumulator`] - Revenue, profit and quantity accumulation
//!   - [`core::ranker`] - Ordering, bonuses and top products
//!   - [`core::pipeline`] - Entry contract and stage orchestration
//! - [`io`] - JSON input loading and JSON/CSV report output
//! - [`cli`] - CLI arguments parsing
//!
//! # Ranking
//!
//! Sellers are ordered by profit, then revenue, then number of sales (all
//! descending), then by locale-collated name. The default bonus is 15% of
//! profit for the top seller, 10% for the next two, nothing for the last and
//! 5% for everyone else. The second and third tiers take precedence over the
//! last, so with two or three sellers the last one still receives 10%.
//!
//! # Failure Model
//!
//! - Empty input collections and missing strategies abort the run
//! - Purchase records citing an unknown seller, and line items citing an
//!   unknown SKU, are skipped and reported to a [`DiagnosticSink`]
//! - Amounts that would leave the `Decimal` range skip the affected record or
//!   line item and are reported the same way

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod strategy;
pub mod types;

pub use core::{
    analyze_sales_data, analyze_sales_data_with_sink, AnalysisConfig, AnalysisOptions,
    CollectingSink, DiagnosticSink, TracingSink,
};
pub use io::{read_sales_data, write_reports_csv, write_reports_json};
pub use strategy::{BonusByProfit, BonusStrategy, RevenueStrategy, SimpleRevenue};
pub use types::{
    AnalysisError, Diagnostic, LineItem, Product, PurchaseRecord, SaleLine, SalesData, Seller,
    SellerReport, SellerStat, TopProduct,
};
