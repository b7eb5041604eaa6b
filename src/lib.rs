//! csv2geojson Library
//!
//! A Rust library for converting CSV files of coordinate records into GeoJSON
//! feature collections ready to be dropped onto a browser map as markers.
//!
//! This library provides tools for:
//! - Reading comma-separated coordinate tables with a label header row
//! - Validating each data row against the header's column count
//! - Building point features with a name and an HTML popup description
//! - Writing the collection as plain GeoJSON or as a loadable script fragment
//! - Per-row rejection reporting that never aborts the batch

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod csv_source;
        pub mod geojson_writer;
        pub mod record_converter;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{HeaderLabels, ParsedPoint, RejectionReason, RowRejection};
pub use app::services::record_converter::{ConversionResult, ConversionStats, RecordConverter};
pub use config::ConverterConfig;

/// Result type alias for csv2geojson
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal error types for a conversion run
///
/// Per-row problems are not errors: they are reported as
/// [`RowRejection`] values and the run carries on.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Input file does not exist
    #[error("Cannot find input file: {path}")]
    InputNotFound { path: String },

    /// Input file exists but could not be read
    #[error("Cannot read from file (check permissions?): {path}")]
    InputUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Header row cannot yield any labels
    #[error("Malformed header: {message}")]
    MalformedHeader { message: String },

    /// Not enough rows for a header plus one data row
    #[error("At least one header row and one data row are required, found {found} row(s)")]
    InsufficientRows { found: usize },

    /// Output directory does not exist
    #[error("Specified output directory '{path}' does not exist")]
    OutputDirectoryMissing { path: String },

    /// Output file could not be created or written
    #[error("Cannot write to file (check permissions?): {path}")]
    OutputUnwritable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an input not found error
    pub fn input_not_found(path: impl Into<String>) -> Self {
        Self::InputNotFound { path: path.into() }
    }

    /// Create an input unreadable error
    pub fn input_unreadable(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::InputUnreadable {
            path: path.into(),
            source,
        }
    }

    /// Create a CSV parsing error tied to a file
    pub fn csv_parsing(file: impl Into<String>, source: csv::Error) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: source.to_string(),
            source: Some(source),
        }
    }

    /// Create a malformed header error
    pub fn malformed_header(message: impl Into<String>) -> Self {
        Self::MalformedHeader {
            message: message.into(),
        }
    }

    /// Create an insufficient rows error
    pub fn insufficient_rows(found: usize) -> Self {
        Self::InsufficientRows { found }
    }

    /// Create an output directory missing error
    pub fn output_directory_missing(path: impl Into<String>) -> Self {
        Self::OutputDirectoryMissing { path: path.into() }
    }

    /// Create an output unwritable error
    pub fn output_unwritable(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::OutputUnwritable {
            path: path.into(),
            source,
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}
