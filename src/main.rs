//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `geo_sift` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use geo_sift::initialization::init_logger_with;
use geo_sift::{run_filter, Config};

// Records are geocoded one at a time, so a single-threaded runtime is enough.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Run the filter using the library
    match run_filter(config).await {
        Ok(report) => {
            // Print user-friendly summary
            println!(
                "✅ Processed {} record{} ({} geo-tagged, {} in Africa) in {:.1}s",
                report.records_seen,
                if report.records_seen == 1 { "" } else { "s" },
                report.records_with_coordinates,
                report.matched_records,
                report.elapsed_seconds
            );
            println!("Filtered records saved in {}", report.output_path.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("geo_sift error: {:#}", e);
            process::exit(1);
        }
    }
}
