//! Soft failures observed while indexing and accumulating
//!
//! A diagnostic never aborts the run and never shows up in the returned
//! reports. It is handed to a [`DiagnosticSink`](crate::core::DiagnosticSink)
//! so that callers can log it, collect it, or escalate it.

use super::sales::{RecordId, SellerId, Sku};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The record's seller id has no match; the whole record was skipped
    MissingSeller {
        seller_id: SellerId,
        record_id: RecordId,
    },

    /// The line item's SKU has no match; only that line item was skipped
    MissingProduct { sku: Sku, record_id: RecordId },

    /// Two sellers share an id; lookups resolve to the later one
    DuplicateSeller { seller_id: SellerId },

    /// Two products share a SKU; lookups resolve to the later one
    DuplicateProduct { sku: Sku },

    /// An amount left the `Decimal` range. With a SKU only that line item was
    /// skipped, without one the whole record was
    AmountOverflow {
        sku: Option<Sku>,
        record_id: RecordId,
    },
}

impl Diagnostic {
    pub fn missing_seller(seller_id: &str, record_id: &str) -> Self {
        Diagnostic::MissingSeller {
            seller_id: seller_id.to_string(),
            record_id: record_id.to_string(),
        }
    }

    pub fn missing_product(sku: &str, record_id: &str) -> Self {
        Diagnostic::MissingProduct {
            sku: sku.to_string(),
            record_id: record_id.to_string(),
        }
    }

    pub fn duplicate_seller(seller_id: &str) -> Self {
        Diagnostic::DuplicateSeller {
            seller_id: seller_id.to_string(),
        }
    }

    pub fn duplicate_product(sku: &str) -> Self {
        Diagnostic::DuplicateProduct {
            sku: sku.to_string(),
        }
    }

    pub fn record_overflow(record_id: &str) -> Self {
        Diagnostic::AmountOverflow {
            sku: None,
            record_id: record_id.to_string(),
        }
    }

    pub fn item_overflow(sku: &str, record_id: &str) -> Self {
        Diagnostic::AmountOverflow {
            sku: Some(sku.to_string()),
            record_id: record_id.to_string(),
        }
    }

    /// The purchase record this diagnostic refers to, if any
    pub fn record_id(&self) -> Option<&str> {
        match self {
            Diagnostic::MissingSeller { record_id, .. }
            | Diagnostic::MissingProduct { record_id, .. }
            | Diagnostic::AmountOverflow { record_id, .. } => Some(record_id),
            Diagnostic::DuplicateSeller { .. } | Diagnostic::DuplicateProduct { .. } => None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingSeller {
                seller_id,
                record_id,
            } => write!(
                f,
                "Seller {} not found, purchase record {} skipped",
                seller_id, record_id
            ),
            Diagnostic::MissingProduct { sku, record_id } => write!(
                f,
                "Product {} not found in purchase record {}, line item skipped",
                sku, record_id
            ),
            Diagnostic::DuplicateSeller { seller_id } => {
                write!(f, "Duplicate seller id {}, last occurrence wins", seller_id)
            }
            Diagnostic::DuplicateProduct { sku } => {
                write!(f, "Duplicate product SKU {}, last occurrence wins", sku)
            }
            Diagnostic::AmountOverflow {
                sku: Some(sku),
                record_id,
            } => write!(
                f,
                "Amount overflow for product {} in purchase record {}, line item skipped",
                sku, record_id
            ),
            Diagnostic::AmountOverflow {
                sku: None,
                record_id,
            } => write!(
                f,
                "Amount overflow in purchase record {}, record skipped",
                record_id
            ),
        }
    }
}
