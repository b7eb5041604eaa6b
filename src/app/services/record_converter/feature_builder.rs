//! Feature construction for validated points
//!
//! Each point becomes a GeoJSON `Point` feature with exactly two string
//! properties: `name` and `popupContent`.

use geojson::{Feature, Geometry, JsonObject, JsonValue, Value};

use crate::app::models::{HeaderLabels, ParsedPoint};
use crate::constants::{
    LABEL_SEPARATOR, POPUP_EMPHASIS_CLOSE, POPUP_EMPHASIS_OPEN, POPUP_LINE_BREAK, PROPERTY_NAME,
    PROPERTY_POPUP_CONTENT,
};

/// Build the point feature for one validated row
pub fn build_feature(point: &ParsedPoint, labels: &HeaderLabels) -> Feature {
    // GeoJSON positions are [longitude, latitude]
    let geometry = Geometry::new(Value::Point(vec![point.longitude, point.latitude]));

    let mut properties = JsonObject::new();
    properties.insert(
        PROPERTY_NAME.to_string(),
        JsonValue::from(feature_name(point, labels)),
    );
    properties.insert(
        PROPERTY_POPUP_CONTENT.to_string(),
        JsonValue::from(popup_content(point, labels)),
    );

    Feature {
        bbox: None,
        geometry: Some(geometry),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

/// `"<first label>: <first value>"`
pub fn feature_name(point: &ParsedPoint, labels: &HeaderLabels) -> String {
    let first_value = point.values.first().map(String::as_str).unwrap_or_default();
    format!("{}{}{}", labels.primary(), LABEL_SEPARATOR, first_value)
}

/// Emphasised `"lat, lon"` line followed by one `label: value` line per value
pub fn popup_content(point: &ParsedPoint, labels: &HeaderLabels) -> String {
    // Debug formatting keeps the ".0" on integral values, matching the JSON coordinates
    let mut content = format!(
        "{}{:?}, {:?}{}",
        POPUP_EMPHASIS_OPEN, point.latitude, point.longitude, POPUP_EMPHASIS_CLOSE
    );

    for (label, value) in point.labelled_values(labels) {
        content.push_str(POPUP_LINE_BREAK);
        content.push_str(label);
        content.push_str(LABEL_SEPARATOR);
        content.push_str(value);
    }

    content
}
