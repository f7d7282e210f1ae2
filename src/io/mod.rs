//! I/O module
//!
//! Handles loading the input bundle and writing reports. Nothing here is used
//! by the analysis pipeline itself; these are adapters for the binary.
//!
//! # Components
//!
//! - `json_reader` - JSON input bundle loading
//! - `report_format` - Report serialization (JSON, CSV)

pub mod json_reader;
pub mod report_format;

pub use json_reader::{parse_sales_data, read_sales_data};
pub use report_format::{write_reports_csv, write_reports_json};
