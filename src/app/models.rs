//! Data models for CSV to GeoJSON conversion
//!
//! This module contains the transient data structures that flow through a
//! conversion run: the header labels, validated points and the rejection
//! records produced for rows that fail validation.

use crate::constants::REJECTED_ROW_JOIN;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

// =============================================================================
// Header Labels
// =============================================================================

/// Ordered field names taken from the header row, columns 2 onwards
///
/// Never empty. Immutable once established for a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>")]
pub struct HeaderLabels(Vec<String>);

impl TryFrom<Vec<String>> for HeaderLabels {
    type Error = Error;

    fn try_from(labels: Vec<String>) -> Result<Self> {
        Self::new(labels)
    }
}

impl HeaderLabels {
    /// Create header labels, rejecting an empty label set
    pub fn new(labels: Vec<String>) -> Result<Self> {
        if labels.is_empty() {
            return Err(Error::malformed_header(
                "header must define at least one label column after latitude and longitude",
            ));
        }
        Ok(Self(labels))
    }

    /// Number of label columns defined by the header
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a constructed value
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The first label, used for the feature name
    pub fn primary(&self) -> &str {
        &self.0[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

// =============================================================================
// Parsed Point
// =============================================================================

/// A data row that passed shape and numeric validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedPoint {
    /// Decimal latitude, not range checked
    pub latitude: f64,

    /// Decimal longitude, not range checked
    pub longitude: f64,

    /// Field values aligned with the header labels; may be shorter, never empty
    pub values: Vec<String>,
}

impl ParsedPoint {
    /// Label/value pairs in header order, truncated to the values supplied
    pub fn labelled_values<'a>(
        &'a self,
        labels: &'a HeaderLabels,
    ) -> impl Iterator<Item = (&'a str, &'a str)> {
        labels.iter().zip(self.values.iter().map(String::as_str))
    }
}

// =============================================================================
// Row Rejection
// =============================================================================

/// Why a data row was dropped
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum RejectionReason {
    /// Only latitude and longitude were supplied
    #[error("row has no value columns")]
    NoValueColumns,

    /// More value columns than the header defines labels for
    #[error("row has {found} value columns but the header defines {allowed}")]
    TooManyValueColumns { found: usize, allowed: usize },

    /// Latitude is not a finite decimal number
    #[error("latitude '{0}' is not a decimal number")]
    InvalidLatitude(String),

    /// Longitude is not a finite decimal number
    #[error("longitude '{0}' is not a decimal number")]
    InvalidLongitude(String),
}

/// A rejected data row together with its raw content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowRejection {
    /// 1-based record number in the input, header included
    pub line: usize,

    /// The raw fields exactly as read
    pub row: Vec<String>,

    /// Why the row was dropped
    pub reason: RejectionReason,
}

impl RowRejection {
    pub fn new(line: usize, row: Vec<String>, reason: RejectionReason) -> Self {
        Self { line, row, reason }
    }

    /// The raw row joined back together for operator-facing messages
    pub fn raw_line(&self) -> String {
        self.row.join(REJECTED_ROW_JOIN)
    }
}
