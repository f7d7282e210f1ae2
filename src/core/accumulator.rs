//! Accumulation of per-seller metrics from purchase records
//!
//! The accumulator walks purchase records once, in order, and mutates the
//! resolved [`SellerStat`] in place.
//!
//! For each record:
//! 1. Unknown seller: report a diagnostic and skip the whole record
//! 2. Otherwise count the sale and add `total_amount` to revenue
//! 3. For each line item, unknown SKU: report a diagnostic and skip the item
//! 4. Otherwise add `revenue - cost` to profit and the quantity to the SKU total
//!
//! Amounts are added with checked arithmetic. A record whose total would push
//! revenue out of the `Decimal` range is skipped whole; a line item whose cost
//! or profit would overflow is skipped alone. Both are reported as
//! [`Diagnostic::AmountOverflow`].
//!
//! Note that a seller's revenue comes from the record total while profit comes
//! from the line items, so the two are not derived from the same numbers.

use crate::core::indexer::{ProductIndex, SellerIndex};
use crate::core::traits::DiagnosticSink;
use crate::strategy::RevenueStrategy;
use crate::types::{Diagnostic, LineItem, Product, PurchaseRecord, SellerStat};
use rust_decimal::Decimal;
use tracing::debug;

/// Counters describing one accumulation pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccumulationSummary {
    pub records_processed: usize,
    pub records_skipped: usize,
    pub items_processed: usize,
    pub items_skipped: usize,
}

/// Single-pass accumulator over purchase records
pub struct Accumulator<'i, 'a> {
    sellers: &'i SellerIndex<'a>,
    products: &'i ProductIndex<'a>,
    revenue: &'i dyn RevenueStrategy,
}

impl<'i, 'a> Accumulator<'i, 'a> {
    pub fn new(
        sellers: &'i SellerIndex<'a>,
        products: &'i ProductIndex<'a>,
        revenue: &'i dyn RevenueStrategy,
    ) -> Self {
        Accumulator {
            sellers,
            products,
            revenue,
        }
    }

    /// Accumulate `records` into `stats`
    ///
    /// `stats` must be the collection seeded from the same sellers the
    /// seller index was built from.
    pub fn accumulate(
        &self,
        records: &[PurchaseRecord],
        stats: &mut [SellerStat],
        sink: &mut dyn DiagnosticSink,
    ) -> AccumulationSummary {
        let mut summary = AccumulationSummary::default();

        for record in records {
            let Some(stat) = self
                .sellers
                .position(&record.seller_id)
                .and_then(|position| stats.get_mut(position))
            else {
                sink.report(Diagnostic::missing_seller(&record.seller_id, &record.id));
                summary.records_skipped += 1;
                continue;
            };

            if self.apply_record(record, stat, sink, &mut summary) {
                summary.records_processed += 1;
            } else {
                summary.records_skipped += 1;
            }
        }

        debug!(
            records_processed = summary.records_processed,
            records_skipped = summary.records_skipped,
            items_processed = summary.items_processed,
            items_skipped = summary.items_skipped,
            "Accumulated purchase records"
        );

        summary
    }

    fn apply_record(
        &self,
        record: &PurchaseRecord,
        stat: &mut SellerStat,
        sink: &mut dyn DiagnosticSink,
        summary: &mut AccumulationSummary,
    ) -> bool {
        let Some(revenue) = stat.revenue.checked_add(record.total_amount) else {
            sink.report(Diagnostic::record_overflow(&record.id));
            return false;
        };
        stat.sales_count += 1;
        stat.revenue = revenue;

        for item in &record.items {
            let Some(product) = self.products.get(&item.sku) else {
                sink.report(Diagnostic::missing_product(&item.sku, &record.id));
                summary.items_skipped += 1;
                continue;
            };

            let Some(profit) = self
                .line_profit(item, product)
                .and_then(|line_profit| stat.profit.checked_add(line_profit))
            else {
                sink.report(Diagnostic::item_overflow(&item.sku, &record.id));
                summary.items_skipped += 1;
                continue;
            };

            stat.profit = profit;
            stat.sold_quantities.add(&item.sku, item.quantity);
            summary.items_processed += 1;
        }

        true
    }

    /// `revenue - cost` of one line, `None` on overflow
    fn line_profit(&self, item: &LineItem, product: &Product) -> Option<Decimal> {
        let cost = product
            .purchase_price
            .checked_mul(Decimal::from(item.quantity))?;
        self.revenue
            .revenue(&item.sale_line(), product)
            .checked_sub(cost)
    }
}
