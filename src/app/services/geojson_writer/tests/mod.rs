//! Test utilities for GeoJSON writer testing

use geojson::FeatureCollection;

use crate::app::services::record_converter::RecordConverter;


/// A two-feature collection built through the real converter
pub fn create_test_collection() -> FeatureCollection {
    let rows = vec![
        vec!["lat", "lon", "label"],
        vec!["51.5", "-0.1", "Big Ben"],
        vec!["48.8584", "2.2945", "Eiffel Tower"],
    ]
    .into_iter()
    .map(|row| row.into_iter().map(String::from).collect())
    .collect::<Vec<Vec<String>>>();

    RecordConverter::new().convert(rows).unwrap().collection
}
