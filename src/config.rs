//! Configuration for a conversion run.
//!
//! Holds the output destination and formatting settings. Values start from
//! the defaults in [`crate::constants`] and are overridden by CLI arguments
//! through the `with_*` builders.

use crate::constants::{DEFAULT_OUTPUT_FILE, DEFAULT_SCRIPT_PREFIX};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Settings for a single conversion run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Destination file for the rendered collection
    pub output_path: PathBuf,

    /// Text written before the JSON; `None` writes plain GeoJSON
    pub script_prefix: Option<String>,

    /// Pretty-print the JSON instead of the compact single-line form
    pub pretty: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            script_prefix: Some(DEFAULT_SCRIPT_PREFIX.to_string()),
            pretty: false,
        }
    }
}

impl ConverterConfig {
    /// Set the output file
    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }

    /// Replace the script assignment prefix
    pub fn with_script_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.script_prefix = Some(prefix.into());
        self
    }

    /// Write plain GeoJSON with no script prefix
    pub fn without_script_prefix(mut self) -> Self {
        self.script_prefix = None;
        self
    }

    /// Enable pretty-printed JSON
    pub fn with_pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Check settings for consistency
    pub fn validate(&self) -> Result<()> {
        if self.output_path.as_os_str().is_empty() {
            return Err(Error::configuration("Output path cannot be empty"));
        }

        if self.output_path.is_dir() {
            return Err(Error::configuration(format!(
                "Output path is a directory: {}",
                self.output_path.display()
            )));
        }

        debug!("Validated configuration: {:?}", self);
        Ok(())
    }
}
