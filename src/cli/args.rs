use crate::core::AnalysisConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Rank sellers by profit and compute their bonuses
#[derive(Parser, Debug)]
#[command(name = "sales-leaderboard")]
#[command(about = "Rank sellers by profit and compute their bonuses", long_about = None)]
pub struct CliArgs {
    /// Input JSON file holding sellers, products and purchase records
    #[arg(value_name = "INPUT", help = "Path to the input JSON file")]
    pub input_file: PathBuf,

    /// Output format for the leaderboard
    #[arg(
        long = "format",
        value_name = "FORMAT",
        default_value = "json",
        help = "Output format: 'json' or 'csv'"
    )]
    pub format: OutputFormat,

    /// Number of best-selling products listed per seller
    #[arg(
        long = "top-products",
        value_name = "COUNT",
        help = "Number of top products listed per seller (default: 10)"
    )]
    pub top_products: Option<usize>,

    /// Output file (stdout when omitted)
    #[arg(
        long = "output",
        short = 'o',
        value_name = "PATH",
        help = "Write the leaderboard to PATH instead of stdout"
    )]
    pub output_file: Option<PathBuf>,
}

/// Available report formats
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Csv,
}

impl CliArgs {
    /// Create an AnalysisConfig from CLI arguments
    ///
    /// Falls back to the default limit when none is given. A zero limit is
    /// replaced by the default with a warning.
    pub fn to_analysis_config(&self) -> AnalysisConfig {
        match self.top_products {
            Some(limit) => AnalysisConfig::new(limit),
            None => AnalysisConfig::default(),
        }
    }
}
