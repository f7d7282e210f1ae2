//! JSON loader for the input bundle
//!
//! The input file is a single JSON object with three arrays:
//!
//! ```json
//! {
//!   "sellers": [{"id": "seller_1", "first_name": "Ivan", "last_name": "Ivanov"}],
//!   "products": [{"sku": "SKU_001", "name": "Widget", "category": "Tools", "purchase_price": 50}],
//!   "purchase_records": [{
//!     "receipt_id": "receipt_1", "seller_id": "seller_1", "total_amount": 180,
//!     "items": [{"sku": "SKU_001", "sale_price": 100, "quantity": 2, "discount": 10}]
//!   }]
//! }
//! ```
//!
//! Shape errors (a collection that is not an array, a missing field inside a
//! record) fail here as [`AnalysisError::ParseError`]. Absent or empty
//! collections load successfully and are rejected by the pipeline entry check.

use crate::types::{AnalysisError, SalesData};
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

/// Load an input bundle from a JSON file
///
/// # Errors
///
/// - [`AnalysisError::FileNotFound`] if `path` does not exist
/// - [`AnalysisError::IoError`] for other read failures
/// - [`AnalysisError::ParseError`] if the JSON is malformed or mis-shaped
pub fn read_sales_data(path: &Path) -> Result<SalesData, AnalysisError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => AnalysisError::file_not_found(&path.display().to_string()),
        _ => AnalysisError::from(e),
    })?;

    let data = serde_json::from_reader(BufReader::with_capacity(8 * 1024, file))?;
    Ok(data)
}

/// Parse an input bundle from a JSON string
pub fn parse_sales_data(json: &str) -> Result<SalesData, AnalysisError> {
    Ok(serde_json::from_str(json)?)
}
