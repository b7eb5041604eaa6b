//! Test utilities for record converter testing
//!
//! This module provides row builders and fixture tables shared by the
//! converter test modules.

use geojson::{Feature, Value};

use crate::app::models::HeaderLabels;

mod row_parser_tests;

/// Build a raw row from string slices
pub fn row(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|s| s.to_string()).collect()
}

/// Build header labels from string slices
pub fn labels(names: &[&str]) -> HeaderLabels {
    HeaderLabels::new(row(names)).unwrap()
}

/// A small table mixing valid and invalid rows
///
/// Rows 2, 4 and 6 are valid; 3 (non-numeric latitude), 5 (too many
/// columns) and 7 (no value columns) are rejected.
pub fn create_mixed_rows() -> Vec<Vec<String>> {
    vec![
        row(&["latitude", "longitude", "label", "note"]),
        row(&["51.5", "-0.1", "Big Ben", "clock"]),
        row(&["abc", "-0.1", "x"]),
        row(&["48.8584", "2.2945", "Eiffel Tower"]),
        row(&["40.0", "-74.0", "a", "b", "c"]),
        row(&["-33.8568", "151.2153", "Opera House", "Sydney"]),
        row(&["1.0", "2.0"]),
    ]
}

/// `[longitude, latitude]` of a point feature
pub fn point_coordinates(feature: &Feature) -> Vec<f64> {
    match &feature.geometry.as_ref().expect("feature has geometry").value {
        Value::Point(position) => position.clone(),
        other => panic!("expected point geometry, got {:?}", other),
    }
}

/// A string property of a feature
pub fn string_property<'a>(feature: &'a Feature, key: &str) -> &'a str {
    feature
        .property(key)
        .and_then(|value| value.as_str())
        .expect("string property present")
}
