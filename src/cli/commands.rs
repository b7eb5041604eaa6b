//! Command implementation for the csv2geojson CLI
//!
//! This module contains the run orchestration, logging setup and the final
//! summary report.

use crate::app::services::csv_source::read_rows;
use crate::app::services::geojson_writer::GeoJsonWriter;
use crate::app::services::record_converter::{ConversionStats, RecordConverter};
use crate::cli::args::Args;
use crate::constants::{DEFAULT_OUTPUT_FILE, PROGRESS_TIMESTAMP_FORMAT};
use crate::Result;
use chrono::Utc;
use colored::*;
use std::path::Path;
use tracing::{debug, info, warn};

/// Main command runner
///
/// 1. Set up logging and validate arguments
/// 2. Check the output destination before any work is done
/// 3. Read and convert all rows in memory
/// 4. Write the collection and report a summary
pub fn run(args: Args) -> Result<ConversionStats> {
    setup_logging(&args);

    info!(
        "{}: Starting conversion of data from CSV to GeoJSON",
        timestamp()
    );
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    if args.uses_default_output() {
        warn!(
            "No output file specified, using default '{}' in current working directory",
            DEFAULT_OUTPUT_FILE
        );
    }

    let config = args.to_config();
    config.validate()?;

    let writer = GeoJsonWriter::new(config);
    writer.check_destination()?;

    let rows = read_rows(&args.input_path)?;
    let result = RecordConverter::new().convert(rows)?;

    writer.write(&result.collection)?;

    info!(
        "{}: Completed conversion of data from CSV to GeoJSON",
        timestamp()
    );

    if args.show_summary() {
        print_summary(&result.stats, writer.output_path());
    }

    Ok(result.stats)
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("csv2geojson={}", log_level)));

    let initialized = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init();

    if initialized.is_err() {
        debug!("Logging already initialized");
    } else {
        debug!("Logging initialized at level: {}", log_level);
    }
}

/// Current UTC time for progress lines
fn timestamp() -> String {
    Utc::now().format(PROGRESS_TIMESTAMP_FORMAT).to_string()
}

/// Print the final conversion summary to stdout
fn print_summary(stats: &ConversionStats, output_path: &Path) {
    println!("\n{}", "Conversion Summary".bright_green().bold());
    println!(
        "  {} {}",
        "Rows read:".bright_cyan(),
        stats.total_rows_read.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Rows converted:".bright_cyan(),
        stats.rows_converted.to_string().bright_white().bold()
    );
    if stats.rows_rejected > 0 {
        println!(
            "  {} {}",
            "Rows rejected:".bright_red(),
            stats.rows_rejected.to_string().bright_red().bold()
        );
    } else {
        println!(
            "  {} {}",
            "Rows rejected:".bright_cyan(),
            stats.rows_rejected.to_string().bright_white()
        );
    }
    println!(
        "  {} {:.1}%",
        "Success rate:".bright_cyan(),
        stats.success_rate()
    );
    println!(
        "  {} {}",
        "Output file:".bright_cyan(),
        output_path.display().to_string().bright_white()
    );
}
