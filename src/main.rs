//! Sales Leaderboard CLI
//!
//! Command-line interface for ranking sellers from a JSON input bundle.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- data.json > leaderboard.json
//! cargo run -- --format csv data.json > leaderboard.csv
//! cargo run -- --top-products 5 --output leaderboard.json data.json
//! RUST_LOG=debug cargo run -- data.json
//! ```
//!
//! The program reads sellers, products and purchase records from the input
//! file, runs the analysis with the default revenue and bonus strategies, and
//! writes the leaderboard to stdout (or `--output`). Diagnostics about skipped
//! records are logged to stderr; set `RUST_LOG` to change verbosity.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, malformed input, empty collection, etc.)

use sales_leaderboard::cli::{self, CliArgs, OutputFormat};
use sales_leaderboard::{
    analyze_sales_data, read_sales_data, write_reports_csv, write_reports_json, AnalysisError,
    AnalysisOptions,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = cli::parse_args();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &CliArgs) -> Result<(), AnalysisError> {
    let data = read_sales_data(&args.input_file)?;
    let options = AnalysisOptions::default().with_config(args.to_analysis_config());
    let reports = analyze_sales_data(&data, &options)?;

    let mut output: Box<dyn Write> = match &args.output_file {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };

    match args.format {
        OutputFormat::Json => write_reports_json(&reports, &mut *output),
        OutputFormat::Csv => write_reports_csv(&reports, &mut *output),
    }
}
