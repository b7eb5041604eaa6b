//! Conversion orchestration over a full row sequence
//!
//! Row 0 establishes the header labels; every following row is validated
//! and, when accepted, turned into a feature. Output order is input order.

use geojson::FeatureCollection;
use tracing::{debug, info, warn};

use super::feature_builder::build_feature;
use super::header::extract_header_labels;
use super::row_parser::parse_data_row;
use super::stats::{ConversionResult, ConversionStats};
use crate::app::models::RowRejection;
use crate::constants::MIN_INPUT_ROWS;
use crate::{Error, Result};

/// Converts raw CSV rows into a GeoJSON feature collection
#[derive(Debug, Default, Clone, Copy)]
pub struct RecordConverter;

impl RecordConverter {
    pub fn new() -> Self {
        Self
    }

    /// Convert a header row followed by data rows
    ///
    /// Fails when fewer than two rows are supplied or the header is
    /// malformed. Invalid data rows are skipped, logged and reported in
    /// [`ConversionResult::rejections`].
    pub fn convert<I>(&self, rows: I) -> Result<ConversionResult>
    where
        I: IntoIterator<Item = Vec<String>>,
    {
        let mut rows = rows.into_iter();
        let mut stats = ConversionStats::new();

        let header_row = rows.next().ok_or_else(|| Error::insufficient_rows(0))?;
        stats.total_rows_read += 1;
        let labels = extract_header_labels(&header_row)?;

        let mut features = Vec::new();
        let mut rejections = Vec::new();

        for row in rows {
            stats.total_rows_read += 1;

            match parse_data_row(&row, &labels) {
                Ok(point) => {
                    features.push(build_feature(&point, &labels));
                    stats.rows_converted += 1;
                }
                Err(reason) => {
                    let rejection = RowRejection::new(stats.total_rows_read, row, reason);
                    warn!("Ignoring invalid line: {}", rejection.raw_line());
                    debug!(
                        "Rejected record {}: {}",
                        rejection.line, rejection.reason
                    );
                    rejections.push(rejection);
                    stats.rows_rejected += 1;
                }
            }
        }

        if stats.total_rows_read < MIN_INPUT_ROWS {
            return Err(Error::insufficient_rows(stats.total_rows_read));
        }

        info!(
            "Converted {} of {} data rows ({} rejected)",
            stats.rows_converted,
            stats.data_rows(),
            stats.rows_rejected
        );

        Ok(ConversionResult {
            collection: FeatureCollection {
                bbox: None,
                features,
                foreign_members: None,
            },
            stats,
            rejections,
        })
    }
}
