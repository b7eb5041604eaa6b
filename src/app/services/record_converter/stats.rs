//! Conversion statistics and result structures
//!
//! This module provides the counters reported at the end of a run and the
//! result bundle handed to the writer.

use geojson::FeatureCollection;

use crate::app::models::RowRejection;

/// Result of converting a full row sequence
#[derive(Debug, Clone)]
pub struct ConversionResult {
    /// One feature per accepted data row, in input order
    pub collection: FeatureCollection,

    /// Row counters
    pub stats: ConversionStats,

    /// Every rejected data row with its raw content
    pub rejections: Vec<RowRejection>,
}

impl ConversionResult {
    /// Number of features in the collection
    pub fn feature_count(&self) -> usize {
        self.collection.features.len()
    }
}

/// Row counters for a conversion run
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ConversionStats {
    /// Rows read from the input, header included
    pub total_rows_read: usize,

    /// Data rows turned into features
    pub rows_converted: usize,

    /// Data rows dropped by validation
    pub rows_rejected: usize,
}

impl ConversionStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Data rows seen, i.e. everything except the header
    pub fn data_rows(&self) -> usize {
        self.total_rows_read.saturating_sub(1)
    }

    /// Share of data rows converted, as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.data_rows() == 0 {
            0.0
        } else {
            (self.rows_converted as f64 / self.data_rows() as f64) * 100.0
        }
    }

    /// Every data row was either converted or rejected
    pub fn is_consistent(&self) -> bool {
        self.rows_converted + self.rows_rejected == self.data_rows()
    }
}
