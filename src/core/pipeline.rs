//! Pipeline entry point
//!
//! Runs the three stages in sequence over an input bundle:
//!
//! ```text
//! SalesData ── Indexer ── Accumulator ── Ranker ──> Vec<SellerReport>
//!                             │
//!                      DiagnosticSink (soft failures)
//! ```
//!
//! Every invocation builds its own stats and indexes; nothing is shared
//! between runs.
//!
//! # Entry Contract
//!
//! Checked before any processing, in this order:
//! 1. `sellers`, `products` and `purchase_records` are all non-empty
//! 2. the options supply a revenue strategy and a bonus strategy
//!
//! These are the only fatal errors. Unresolved references and amount overflows
//! are reported to the sink and skipped.

use crate::core::accumulator::Accumulator;
use crate::core::diagnostics::TracingSink;
use crate::core::indexer::{seed_seller_stats, ProductIndex, SellerIndex};
use crate::core::options::AnalysisOptions;
use crate::core::ranker::Ranker;
use crate::core::traits::DiagnosticSink;
use crate::strategy::{BonusStrategy, RevenueStrategy};
use crate::types::{AnalysisError, SalesData, SellerReport};
use tracing::info;

/// Analyze `data`, logging diagnostics through `tracing`
///
/// # Examples
///
/// ```
/// use sales_leaderboard::{analyze_sales_data, AnalysisOptions, SalesData};
///
/// let data: SalesData = serde_json::from_str(r#"{
///     "sellers": [{"id": "s1", "first_name": "Ivan", "last_name": "Ivanov"}],
///     "products": [{"sku": "P1", "name": "Widget", "category": "Tools", "purchase_price": 50}],
///     "purchase_records": [{
///         "id": "r1", "seller_id": "s1", "total_amount": 180,
///         "items": [{"sku": "P1", "sale_price": 100, "quantity": 2, "discount": 10}]
///     }]
/// }"#).unwrap();
///
/// let reports = analyze_sales_data(&data, &AnalysisOptions::default()).unwrap();
/// assert_eq!(reports[0].seller_id, "s1");
/// assert_eq!(reports[0].profit, rust_decimal::Decimal::from(80));
/// ```
pub fn analyze_sales_data(
    data: &SalesData,
    options: &AnalysisOptions,
) -> Result<Vec<SellerReport>, AnalysisError> {
    analyze_sales_data_with_sink(data, options, &mut TracingSink)
}

/// Analyze `data`, reporting diagnostics to `sink`
///
/// # Errors
///
/// Returns an error if:
/// - Any input collection is empty ([`AnalysisError::InvalidInput`])
/// - A strategy is missing from `options` ([`AnalysisError::MissingStrategy`])
pub fn analyze_sales_data_with_sink(
    data: &SalesData,
    options: &AnalysisOptions,
    sink: &mut dyn DiagnosticSink,
) -> Result<Vec<SellerReport>, AnalysisError> {
    validate_input(data)?;
    let (revenue, bonus) = validate_options(options)?;

    let sellers = SellerIndex::build(&data.sellers, sink);
    let products = ProductIndex::build(&data.products, sink);
    let mut stats = seed_seller_stats(&data.sellers);

    let summary = Accumulator::new(&sellers, &products, revenue).accumulate(
        &data.purchase_records,
        &mut stats,
        sink,
    );

    let reports = Ranker::new(&products, bonus, options.config.top_products_limit).rank(stats);

    info!(
        sellers = reports.len(),
        distinct_sellers = sellers.len(),
        distinct_products = products.len(),
        records_processed = summary.records_processed,
        records_skipped = summary.records_skipped,
        items_skipped = summary.items_skipped,
        "Sales analysis complete"
    );

    Ok(reports)
}

fn validate_input(data: &SalesData) -> Result<(), AnalysisError> {
    if data.sellers.is_empty() {
        return Err(AnalysisError::invalid_input("sellers"));
    }
    if data.products.is_empty() {
        return Err(AnalysisError::invalid_input("products"));
    }
    if data.purchase_records.is_empty() {
        return Err(AnalysisError::invalid_input("purchase_records"));
    }
    Ok(())
}

fn validate_options(
    options: &AnalysisOptions,
) -> Result<(&dyn RevenueStrategy, &dyn BonusStrategy), AnalysisError> {
    let revenue = options
        .calculate_revenue
        .as_deref()
        .ok_or_else(|| AnalysisError::missing_strategy("calculate_revenue"))?;
    let bonus = options
        .calculate_bonus
        .as_deref()
        .ok_or_else(|| AnalysisError::missing_strategy("calculate_bonus"))?;
    Ok((revenue, bonus))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::diagnostics::CollectingSink;
    use crate::core::options::AnalysisConfig;
    use crate::strategy::{BonusByProfit, SimpleRevenue};
    use crate::types::{Diagnostic, LineItem, Product, PurchaseRecord, Seller, SellerStat};
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    fn sample_data() -> SalesData {
        SalesData {
            sellers: vec![
                Seller {
                    id: "seller_1".to_string(),
                    first_name: "Ivan".to_string(),
                    last_name: "Ivanov".to_string(),
                },
                Seller {
                    id: "seller_2".to_string(),
                    first_name: "Anna".to_string(),
                    last_name: "Petrova".to_string(),
                },
            ],
            products: vec![
                Product {
                    sku: "SKU_001".to_string(),
                    name: "Widget".to_string(),
                    category: "Tools".to_string(),
                    purchase_price: dec("50"),
                },
                Product {
                    sku: "SKU_002".to_string(),
                    name: "Gadget".to_string(),
                    category: "Electronics".to_string(),
                    purchase_price: dec("10"),
                },
            ],
            purchase_records: vec![
                PurchaseRecord {
                    id: "r1".to_string(),
                    seller_id: "seller_1".to_string(),
                    total_amount: dec("180"),
                    items: vec![LineItem {
                        sku: "SKU_001".to_string(),
                        sale_price: dec("100"),
                        quantity: 2,
                        discount: dec("10"),
                    }],
                },
                PurchaseRecord {
                    id: "r2".to_string(),
                    seller_id: "seller_2".to_string(),
                    total_amount: dec("60"),
                    items: vec![LineItem {
                        sku: "SKU_002".to_string(),
                        sale_price: dec("20"),
                        quantity: 3,
                        discount: dec("0"),
                    }],
                },
                PurchaseRecord {
                    id: "r3".to_string(),
                    seller_id: "seller_404".to_string(),
                    total_amount: dec("999"),
                    items: vec![],
                },
            ],
        }
    }

    #[rstest]
    #[case::no_sellers("sellers")]
    #[case::no_products("products")]
    #[case::no_purchase_records("purchase_records")]
    fn test_empty_collection_is_fatal(#[case] collection: &str) {
        let mut data = sample_data();
        match collection {
            "sellers" => data.sellers.clear(),
            "products" => data.products.clear(),
            _ => data.purchase_records.clear(),
        }

        let mut sink = CollectingSink::new();
        let result = analyze_sales_data_with_sink(&data, &AnalysisOptions::default(), &mut sink);

        assert_eq!(result, Err(AnalysisError::invalid_input(collection)));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_input_checked_before_options() {
        let data = SalesData::default();
        let result = analyze_sales_data(&data, &AnalysisOptions::empty());
        assert_eq!(result, Err(AnalysisError::invalid_input("sellers")));
    }

    #[rstest]
    #[case::no_strategies(AnalysisOptions::empty(), "calculate_revenue")]
    #[case::no_bonus(AnalysisOptions::empty().with_revenue(SimpleRevenue), "calculate_bonus")]
    #[case::no_revenue(AnalysisOptions::empty().with_bonus(BonusByProfit), "calculate_revenue")]
    fn test_missing_strategy_is_fatal(#[case] options: AnalysisOptions, #[case] name: &str) {
        let mut sink = CollectingSink::new();
        let result = analyze_sales_data_with_sink(&sample_data(), &options, &mut sink);

        assert_eq!(result, Err(AnalysisError::missing_strategy(name)));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_one_report_per_seller_in_rank_order() {
        let mut sink = CollectingSink::new();
        let reports =
            analyze_sales_data_with_sink(&sample_data(), &AnalysisOptions::default(), &mut sink)
                .unwrap();

        assert_eq!(reports.len(), 2);
        // seller_1 profit 180 - 100 = 80; seller_2 profit 60 - 30 = 30
        assert_eq!(reports[0].seller_id, "seller_1");
        assert_eq!(reports[0].name, "Ivan Ivanov");
        assert_eq!(reports[0].profit, dec("80"));
        assert_eq!(reports[0].revenue, dec("180"));
        assert_eq!(reports[0].bonus, dec("12"));
        assert_eq!(reports[1].seller_id, "seller_2");
        assert_eq!(reports[1].profit, dec("30"));
        assert_eq!(reports[1].bonus, dec("3"));
        assert_eq!(reports[1].top_products[0].quantity, 3);

        assert_eq!(
            sink.into_diagnostics(),
            vec![Diagnostic::missing_seller("seller_404", "r3")]
        );
    }

    #[test]
    fn test_runs_are_idempotent() {
        let data = sample_data();
        let options = AnalysisOptions::default();

        let first = analyze_sales_data_with_sink(&data, &options, &mut CollectingSink::new());
        let second = analyze_sales_data_with_sink(&data, &options, &mut CollectingSink::new());

        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_strategies_and_config() {
        let flat_bonus = |_: usize, _: usize, _: &SellerStat| Decimal::from(7);
        let options = AnalysisOptions::new(SimpleRevenue, flat_bonus)
            .with_config(AnalysisConfig::new(1));

        let reports = analyze_sales_data(&sample_data(), &options).unwrap();

        assert!(reports.iter().all(|r| r.bonus == dec("7")));
        assert!(reports.iter().all(|r| r.top_products.len() <= 1));
    }
}
