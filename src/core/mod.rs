//! Core business logic module
//!
//! This module contains the leaderboard pipeline components:
//! - `traits` - The diagnostic sink abstraction
//! - `diagnostics` - Built-in sinks (tracing, in-memory)
//! - `indexer` - Seller and product lookup tables, stat seeding
//! - `accumulator` - Per-seller metric accumulation over purchase records
//! - `ranker` - Ordering, bonus assignment, top-products derivation
//! - `options` - Strategy and configuration bundle
//! - `pipeline` - Entry point chaining the stages

pub mod accumulator;
pub mod diagnostics;
pub mod indexer;
pub mod options;
pub mod pipeline;
pub mod ranker;
pub mod traits;

pub use accumulator::{AccumulationSummary, Accumulator};
pub use diagnostics::{CollectingSink, TracingSink};
pub use indexer::{seed_seller_stats, ProductIndex, SellerIndex};
pub use options::{AnalysisConfig, AnalysisOptions};
pub use pipeline::{analyze_sales_data, analyze_sales_data_with_sink};
pub use ranker::{
    compare_sellers, top_products, NameOrder, Ranker, DEFAULT_TOP_PRODUCTS_LIMIT,
};
pub use traits::DiagnosticSink;
