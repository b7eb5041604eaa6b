//! Header row handling
//!
//! The header's first two columns only reserve the latitude and longitude
//! positions; their text is discarded. Every column from
//! [`FIRST_LABEL_COLUMN`] onwards is a field label used verbatim.

use crate::app::models::HeaderLabels;
use crate::constants::{FIRST_LABEL_COLUMN, MIN_HEADER_COLUMNS};
use crate::{Error, Result};
use tracing::debug;

/// Extract the label columns from the header row
///
/// Fails when the row is too short to hold the reserved coordinate columns,
/// or when it holds nothing beyond them.
pub fn extract_header_labels(header_row: &[String]) -> Result<HeaderLabels> {
    if header_row.len() < MIN_HEADER_COLUMNS {
        return Err(Error::malformed_header(format!(
            "expected at least {} columns (latitude, longitude), found {}",
            MIN_HEADER_COLUMNS,
            header_row.len()
        )));
    }

    let labels = HeaderLabels::new(header_row[FIRST_LABEL_COLUMN..].to_vec())?;
    debug!("Header defines {} label column(s): {:?}", labels.len(), labels);

    Ok(labels)
}
