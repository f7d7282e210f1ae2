//! Built-in diagnostic sinks
//!
//! - [`TracingSink`] forwards every diagnostic as a `WARN` event
//! - [`CollectingSink`] keeps diagnostics in memory for later inspection

use crate::core::traits::DiagnosticSink;
use crate::types::Diagnostic;
use tracing::warn;

/// Sink that logs each diagnostic through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        match &diagnostic {
            Diagnostic::MissingSeller {
                seller_id,
                record_id,
            } => warn!(seller_id = %seller_id, record_id = %record_id, "{}", diagnostic),
            Diagnostic::MissingProduct { sku, record_id } => {
                warn!(sku = %sku, record_id = %record_id, "{}", diagnostic)
            }
            Diagnostic::DuplicateSeller { seller_id } => {
                warn!(seller_id = %seller_id, "{}", diagnostic)
            }
            Diagnostic::DuplicateProduct { sku } => warn!(sku = %sku, "{}", diagnostic),
            Diagnostic::AmountOverflow { sku, record_id } => {
                warn!(sku = ?sku, record_id = %record_id, "{}", diagnostic)
            }
        }
    }
}

/// Sink that stores diagnostics in arrival order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectingSink {
    diagnostics: Vec<Diagnostic>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collecting_sink_keeps_order() {
        let mut sink = CollectingSink::new();
        sink.report(Diagnostic::missing_seller("seller_9", "receipt_1"));
        sink.report(Diagnostic::missing_product("SKU_404", "receipt_2"));

        assert_eq!(
            sink.diagnostics(),
            &[
                Diagnostic::missing_seller("seller_9", "receipt_1"),
                Diagnostic::missing_product("SKU_404", "receipt_2"),
            ]
        );
    }

    #[test]
    fn test_closure_sink() {
        let mut seen = Vec::new();
        {
            let mut sink = |diagnostic: Diagnostic| seen.push(diagnostic);
            sink.report(Diagnostic::duplicate_product("SKU_001"));
        }
        assert_eq!(seen, vec![Diagnostic::duplicate_product("SKU_001")]);
    }

    #[test]
    fn test_tracing_sink_does_not_panic_without_subscriber() {
        let mut sink = TracingSink;
        sink.report(Diagnostic::missing_seller("seller_9", "receipt_1"));
        sink.report(Diagnostic::duplicate_seller("seller_1"));
    }
}
