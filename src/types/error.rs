//! Error types for the sales leaderboard
//!
//! Only fatal conditions live here. Unresolved seller or product references
//! are soft failures and are reported as [`Diagnostic`](super::Diagnostic)s
//! instead.
//!
//! # Error Categories
//!
//! - **Entry contract**: empty or missing input collections, missing strategies
//! - **File I/O**: input not found, read or write failures
//! - **Parsing**: malformed JSON input, CSV serialization failures

use thiserror::Error;

/// Main error type for the sales leaderboard
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// A required input collection is missing or empty
    ///
    /// Raised before any processing; aborts the run.
    #[error("Invalid input data: '{collection}' must be a non-empty collection")]
    InvalidInput {
        /// Name of the offending collection
        collection: String,
    },

    /// The options bundle does not supply a required strategy
    ///
    /// Raised before any processing; aborts the run.
    #[error("Invalid options: missing required strategy '{name}'")]
    MissingStrategy {
        /// Name of the missing strategy
        name: String,
    },

    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// Input or output could not be parsed or serialized
    #[error("Parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },
}

impl From<std::io::Error> for AnalysisError {
    fn from(error: std::io::Error) -> Self {
        AnalysisError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(error: serde_json::Error) -> Self {
        if error.is_io() {
            return AnalysisError::IoError {
                message: error.to_string(),
            };
        }

        let line = (error.line() > 0).then(|| error.line() as u64);
        AnalysisError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for AnalysisError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        AnalysisError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl AnalysisError {
    /// Create an InvalidInput error
    pub fn invalid_input(collection: &str) -> Self {
        AnalysisError::InvalidInput {
            collection: collection.to_string(),
        }
    }

    /// Create a MissingStrategy error
    pub fn missing_strategy(name: &str) -> Self {
        AnalysisError::MissingStrategy {
            name: name.to_string(),
        }
    }

    /// Create a FileNotFound error
    pub fn file_not_found(path: &str) -> Self {
        AnalysisError::FileNotFound {
            path: path.to_string(),
        }
    }
}
