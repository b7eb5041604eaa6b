//! Raw row reader for the comma-separated input table
//!
//! Rows are returned exactly as the CSV layer yields them, header included.
//! Record lengths are allowed to vary; shape validation is the converter's
//! job, not the reader's.

use crate::constants::CSV_DELIMITER;
use crate::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Read every row of a CSV file
pub fn read_rows(path: &Path) -> Result<Vec<Vec<String>>> {
    let path_str = path.display().to_string();

    if !path.is_file() {
        return Err(Error::input_not_found(path_str));
    }

    info!("Opening CSV file {} and importing data...", path_str);
    let file = File::open(path).map_err(|e| Error::input_unreadable(&path_str, e))?;

    let rows = collect_rows(file).map_err(|e| Error::csv_parsing(&path_str, e))?;

    debug!("Read {} row(s) from {}", rows.len(), path_str);
    Ok(rows)
}

/// Read every row from any byte source
pub fn read_rows_from_reader<R: Read>(reader: R) -> Result<Vec<Vec<String>>> {
    Ok(collect_rows(reader)?)
}

fn collect_rows<R: Read>(reader: R) -> std::result::Result<Vec<Vec<String>>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(CSV_DELIMITER)
        .from_reader(reader);

    let mut rows = Vec::new();
    let mut record = csv::StringRecord::new();
    let mut expected_line = csv_reader.position().line();

    while csv_reader.read_record(&mut record)? {
        // The csv layer drops empty lines without yielding a record
        if let Some(position) = record.position() {
            if position.line() > expected_line {
                debug!(
                    "Skipped {} blank line(s) before line {}",
                    position.line() - expected_line,
                    position.line()
                );
            }
        }
        expected_line = csv_reader.position().line();
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(rows)
}
