//! Core traits for diagnostic reporting
//!
//! The pipeline never prints. Soft failures are handed to a
//! [`DiagnosticSink`], which lets the caller decide whether they are logged,
//! collected, or turned into a hard failure by a wrapper.

use crate::types::Diagnostic;

/// Receiver for soft failures raised during a single analysis run
pub trait DiagnosticSink {
    /// Report one diagnostic
    fn report(&mut self, diagnostic: Diagnostic);
}

impl<F> DiagnosticSink for F
where
    F: FnMut(Diagnostic),
{
    fn report(&mut self, diagnostic: Diagnostic) {
        self(diagnostic)
    }
}
