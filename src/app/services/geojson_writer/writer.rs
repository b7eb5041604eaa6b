//! Core writer implementation

use geojson::FeatureCollection;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::config::ConverterConfig;
use crate::{Error, Result};

/// Writes feature collections according to a [`ConverterConfig`]
#[derive(Debug, Clone)]
pub struct GeoJsonWriter {
    config: ConverterConfig,
}

impl GeoJsonWriter {
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    /// Destination file
    pub fn output_path(&self) -> &Path {
        &self.config.output_path
    }

    /// Render the full file contents: optional prefix, then the JSON
    ///
    /// Contains no timestamps, so equal collections render byte-identically.
    pub fn render(&self, collection: &FeatureCollection) -> Result<String> {
        let json = if self.config.pretty {
            serde_json::to_string_pretty(collection)
        } else {
            serde_json::to_string(collection)
        }
        .map_err(|e| Error::serialization("Failed to serialize feature collection", e))?;

        Ok(match &self.config.script_prefix {
            Some(prefix) => format!("{}{}", prefix, json),
            None => json,
        })
    }

    /// Check that the destination directory exists
    ///
    /// An empty parent means the working directory. Warns when an existing
    /// file is about to be overwritten.
    pub fn check_destination(&self) -> Result<()> {
        self.ensure_directory()?;

        let path = self.output_path();
        if path.is_file() {
            warn!(
                "Specified output file '{}' already exists, and will be overwritten",
                path.display()
            );
        }

        Ok(())
    }

    fn ensure_directory(&self) -> Result<()> {
        match self.output_path().parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => Err(
                Error::output_directory_missing(parent.display().to_string()),
            ),
            _ => Ok(()),
        }
    }

    /// Render and write the collection, returning the number of bytes written
    pub fn write(&self, collection: &FeatureCollection) -> Result<usize> {
        self.ensure_directory()?;

        let contents = self.render(collection)?;
        let path = self.output_path();
        let path_str = path.display().to_string();

        info!(
            "Creating GeoJSON features and writing to file {}",
            path_str
        );

        let file = File::create(path).map_err(|e| Error::output_unwritable(&path_str, e))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(contents.as_bytes())
            .and_then(|_| writer.flush())
            .map_err(|e| Error::output_unwritable(&path_str, e))?;

        debug!(
            "Wrote {} bytes ({} features) to {}",
            contents.len(),
            collection.features.len(),
            path_str
        );

        Ok(contents.len())
    }
}
