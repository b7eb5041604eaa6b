//! Data row validation
//!
//! A row is accepted when it carries between one and `labels.len()` value
//! columns and both coordinates parse as finite decimal numbers. Rows with
//! fewer values than labels are accepted as-is; rows with more are rejected
//! without truncation.

use crate::app::models::{HeaderLabels, ParsedPoint, RejectionReason};
use crate::constants::{FIRST_LABEL_COLUMN, LATITUDE_COLUMN, LONGITUDE_COLUMN};

/// Validate one data row and turn it into a point
pub fn parse_data_row(
    row: &[String],
    labels: &HeaderLabels,
) -> std::result::Result<ParsedPoint, RejectionReason> {
    let value_count = row.len().saturating_sub(FIRST_LABEL_COLUMN);

    if value_count == 0 {
        return Err(RejectionReason::NoValueColumns);
    }
    if value_count > labels.len() {
        return Err(RejectionReason::TooManyValueColumns {
            found: value_count,
            allowed: labels.len(),
        });
    }

    let latitude = parse_coordinate(&row[LATITUDE_COLUMN])
        .ok_or_else(|| RejectionReason::InvalidLatitude(row[LATITUDE_COLUMN].clone()))?;
    let longitude = parse_coordinate(&row[LONGITUDE_COLUMN])
        .ok_or_else(|| RejectionReason::InvalidLongitude(row[LONGITUDE_COLUMN].clone()))?;

    Ok(ParsedPoint {
        latitude,
        longitude,
        values: row[FIRST_LABEL_COLUMN..].to_vec(),
    })
}

/// Parse a decimal coordinate, ignoring surrounding whitespace
///
/// No range check is applied. `NaN` and infinities are refused since they
/// have no GeoJSON representation.
pub fn parse_coordinate(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|parsed| parsed.is_finite())
}
