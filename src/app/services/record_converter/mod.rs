//! Record converter turning CSV coordinate rows into GeoJSON point features
//!
//! This module holds the only real logic of the tool: establishing the header
//! labels, validating each data row against them and building one point
//! feature per valid row.
//!
//! ## Architecture
//!
//! - [`converter`] - Orchestration over the full row sequence
//! - [`header`] - Header label extraction (columns 0 and 1 are reserved)
//! - [`row_parser`] - Shape and numeric validation of a single data row
//! - [`feature_builder`] - Point geometry and name/popup properties
//! - [`stats`] - Conversion statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use csv2geojson::app::services::record_converter::RecordConverter;
//!
//! # fn example() -> csv2geojson::Result<()> {
//! let rows = vec![
//!     vec!["lat".to_string(), "lon".to_string(), "label".to_string()],
//!     vec!["51.5".to_string(), "-0.1".to_string(), "Big Ben".to_string()],
//! ];
//!
//! let result = RecordConverter::new().convert(rows)?;
//! assert_eq!(result.stats.rows_converted, 1);
//! assert_eq!(result.collection.features.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod converter;
pub mod feature_builder;
pub mod header;
pub mod row_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use converter::RecordConverter;
pub use feature_builder::{build_feature, popup_content};
pub use header::extract_header_labels;
pub use row_parser::parse_data_row;
pub use stats::{ConversionResult, ConversionStats};
