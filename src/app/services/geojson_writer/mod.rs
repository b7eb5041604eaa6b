//! GeoJSON output writer
//!
//! Serializes a finished feature collection and writes it to the configured
//! destination, optionally behind a script assignment prefix so a browser
//! map page can load the file with a plain `<script>` tag.
//!
//! The collection is rendered fully in memory; the destination is only
//! touched once the directory has been checked.

pub mod writer;

#[cfg(test)]
pub mod tests;

pub use writer::GeoJsonWriter;
