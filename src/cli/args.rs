//! Command-line argument definitions for csv2geojson
//!
//! This module defines the CLI interface using the clap derive API.

use crate::config::ConverterConfig;
use crate::constants::DEFAULT_OUTPUT_FILE;
use crate::{Error, Result};
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the CSV to GeoJSON converter
///
/// Converts a CSV file of `latitude, longitude, label...` records into a
/// GeoJSON feature collection for overlaying markers on a web map.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "csv2geojson",
    version,
    about = "Convert a CSV file of coordinates into a GeoJSON feature collection for map markers",
    long_about = "Reads a CSV file whose first column is decimal latitude and second column is \
                  decimal longitude. The header text of those two columns is ignored; every \
                  further header column names a field shown in the marker popup. Writes a GeoJSON \
                  FeatureCollection of points, by default prefixed with 'var locations=' so the \
                  file can be loaded directly as a script by a Leaflet map page."
)]
pub struct Args {
    /// Input CSV file
    ///
    /// First column must be decimal latitude, second decimal longitude,
    /// remaining columns are labelled by the header row.
    #[arg(value_name = "INPUT", help = "Input CSV file of coordinate records")]
    pub input_path: PathBuf,

    /// Output file for the generated GeoJSON
    ///
    /// If not specified, points-geojson.js in the current working directory
    /// is used. An existing file is overwritten.
    #[arg(value_name = "OUTPUT", help = "Output GeoJSON file [default: points-geojson.js]")]
    pub output_path: Option<PathBuf>,

    /// Write plain GeoJSON without the script assignment prefix
    #[arg(
        long = "no-prefix",
        conflicts_with = "prefix",
        help = "Write plain GeoJSON without the 'var locations=' prefix"
    )]
    pub no_prefix: bool,

    /// Replace the script assignment prefix
    #[arg(
        long = "prefix",
        value_name = "TEXT",
        help = "Text written before the JSON instead of 'var locations='"
    )]
    pub prefix: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long = "pretty", help = "Pretty-print the JSON output")]
    pub pretty: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: debug, -vv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Args {
    /// Validate the arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input_path.exists() {
            return Err(Error::input_not_found(
                self.input_path.display().to_string(),
            ));
        }

        if !self.input_path.is_file() {
            return Err(Error::configuration(format!(
                "Input path is not a file: {}",
                self.input_path.display()
            )));
        }

        if let Some(prefix) = &self.prefix {
            if prefix.trim().is_empty() {
                return Err(Error::configuration(
                    "Prefix cannot be blank; use --no-prefix for plain GeoJSON",
                ));
            }
        }

        Ok(())
    }

    /// True when no output path was given and the default file is used
    pub fn uses_default_output(&self) -> bool {
        self.output_path.is_none()
    }

    /// Build the run configuration from defaults plus these arguments
    pub fn to_config(&self) -> ConverterConfig {
        let mut config = ConverterConfig::default().with_output_path(
            self.output_path
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE)),
        );

        if self.no_prefix {
            config = config.without_script_prefix();
        } else if let Some(prefix) = &self.prefix {
            config = config.with_script_prefix(prefix.clone());
        }

        if self.pretty {
            config = config.with_pretty();
        }

        config
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "info",
                1 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if the final summary should be printed (not in quiet mode)
    pub fn show_summary(&self) -> bool {
        !self.quiet
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn parse(argv: &[&str]) -> std::result::Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("csv2geojson").chain(argv.iter().copied()))
    }

    #[test]
    fn test_input_is_required() {
        assert!(parse(&[]).is_err());
    }

    #[test]
    fn test_positional_paths() {
        let args = parse(&["points.csv"]).unwrap();
        assert_eq!(args.input_path, PathBuf::from("points.csv"));
        assert!(args.uses_default_output());

        let args = parse(&["points.csv", "/var/www/html/points.js"]).unwrap();
        assert_eq!(
            args.output_path,
            Some(PathBuf::from("/var/www/html/points.js"))
        );
        assert!(!args.uses_default_output());
    }

    #[test]
    fn test_to_config_defaults() {
        let config = parse(&["points.csv"]).unwrap().to_config();
        assert_eq!(config, ConverterConfig::default());
    }

    #[test]
    fn test_to_config_overrides() {
        let config = parse(&["in.csv", "out.geojson", "--no-prefix", "--pretty"])
            .unwrap()
            .to_config();
        assert_eq!(config.output_path, PathBuf::from("out.geojson"));
        assert_eq!(config.script_prefix, None);
        assert!(config.pretty);

        let config = parse(&["in.csv", "--prefix", "var markers="])
            .unwrap()
            .to_config();
        assert_eq!(config.script_prefix.as_deref(), Some("var markers="));
    }

    #[test]
    fn test_prefix_conflicts() {
        assert!(parse(&["in.csv", "--no-prefix", "--prefix", "x="]).is_err());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(parse(&["in.csv", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_log_level() {
        assert_eq!(parse(&["in.csv"]).unwrap().get_log_level(), "info");
        assert_eq!(parse(&["in.csv", "-v"]).unwrap().get_log_level(), "debug");
        assert_eq!(parse(&["in.csv", "-vvv"]).unwrap().get_log_level(), "trace");

        let quiet = parse(&["in.csv", "-q"]).unwrap();
        assert_eq!(quiet.get_log_level(), "error");
        assert!(!quiet.show_summary());
    }

    #[test]
    fn test_validate() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("points.csv");
        std::fs::write(&input, "lat,lon,label\n1,2,x\n").unwrap();

        let args = parse(&[input.to_str().unwrap()]).unwrap();
        assert!(args.validate().is_ok());

        let missing = parse(&[temp_dir.path().join("nope.csv").to_str().unwrap()]).unwrap();
        assert!(matches!(
            missing.validate(),
            Err(Error::InputNotFound { .. })
        ));

        let directory = parse(&[temp_dir.path().to_str().unwrap()]).unwrap();
        assert!(matches!(
            directory.validate(),
            Err(Error::Configuration { .. })
        ));

        let blank_prefix = parse(&[input.to_str().unwrap(), "--prefix", "  "]).unwrap();
        assert!(blank_prefix.validate().is_err());
    }
}
