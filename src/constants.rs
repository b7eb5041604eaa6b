//! Application constants for csv2geojson
//!
//! This module contains the column layout contract, default values and
//! output formatting literals used throughout the converter.

// =============================================================================
// Column Layout
// =============================================================================

/// Column holding the decimal latitude in every row (header text ignored)
pub const LATITUDE_COLUMN: usize = 0;

/// Column holding the decimal longitude in every row (header text ignored)
pub const LONGITUDE_COLUMN: usize = 1;

/// First column carrying a user-supplied label (header) or value (data)
pub const FIRST_LABEL_COLUMN: usize = 2;

/// Minimum number of columns in a header row before labels are considered
pub const MIN_HEADER_COLUMNS: usize = FIRST_LABEL_COLUMN;

/// Minimum number of rows in an input file: one header plus one data row
pub const MIN_INPUT_ROWS: usize = 2;

/// Field delimiter of the input table
pub const CSV_DELIMITER: u8 = b',';

// =============================================================================
// Output Defaults
// =============================================================================

/// Output file written to the working directory when none is given
pub const DEFAULT_OUTPUT_FILE: &str = "points-geojson.js";

/// Assignment placed before the JSON so the file loads as a script
pub const DEFAULT_SCRIPT_PREFIX: &str = "var locations=";

// =============================================================================
// Feature Properties
// =============================================================================

/// Property key for the marker label
pub const PROPERTY_NAME: &str = "name";

/// Property key for the marker popup body
pub const PROPERTY_POPUP_CONTENT: &str = "popupContent";

/// Separator between a label and its value
pub const LABEL_SEPARATOR: &str = ": ";

/// Separator between popup lines
pub const POPUP_LINE_BREAK: &str = "<br />";

/// Opening tag wrapping the coordinate line of a popup
pub const POPUP_EMPHASIS_OPEN: &str = "<b>";

/// Closing tag wrapping the coordinate line of a popup
pub const POPUP_EMPHASIS_CLOSE: &str = "</b>";

// =============================================================================
// Logging
// =============================================================================

/// Timestamp format for start and completion progress lines (UTC)
pub const PROGRESS_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H:%M:%S";

/// Separator used when echoing a rejected row back to the operator
pub const REJECTED_ROW_JOIN: &str = ", ";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_columns_precede_labels() {
        assert_eq!(LATITUDE_COLUMN, 0);
        assert_eq!(LONGITUDE_COLUMN, 1);
        assert!(FIRST_LABEL_COLUMN > LONGITUDE_COLUMN);
        assert_eq!(MIN_HEADER_COLUMNS, 2);
    }

    #[test]
    fn test_output_defaults() {
        assert_eq!(DEFAULT_OUTPUT_FILE, "points-geojson.js");
        assert!(DEFAULT_SCRIPT_PREFIX.ends_with('='));
    }
}
