//! Tests for data row validation

use super::*;
use crate::app::models::RejectionReason;
use crate::app::services::record_converter::parse_data_row;
use crate::app::services::record_converter::row_parser::parse_coordinate;

#[test]
fn test_valid_row() {
    let header = labels(&["label"]);
    let point = parse_data_row(&row(&["51.5", "-0.1", "Big Ben"]), &header).unwrap();

    assert_eq!(point.latitude, 51.5);
    assert_eq!(point.longitude, -0.1);
    assert_eq!(point.values, row(&["Big Ben"]));
}

#[test]
fn test_exactly_header_width_is_accepted() {
    let header = labels(&["label", "note"]);
    let point = parse_data_row(&row(&["1", "2", "a", "b"]), &header).unwrap();
    assert_eq!(point.values.len(), 2);
}

#[test]
fn test_one_more_than_header_width_is_rejected() {
    let header = labels(&["label", "note"]);
    let result = parse_data_row(&row(&["1", "2", "a", "b", "c"]), &header);
    assert_eq!(
        result,
        Err(RejectionReason::TooManyValueColumns {
            found: 3,
            allowed: 2
        })
    );
}

#[test]
fn test_single_value_accepted_with_wider_header() {
    let header = labels(&["label", "note", "extra"]);
    let point = parse_data_row(&row(&["1", "2", "a"]), &header).unwrap();
    assert_eq!(point.values, row(&["a"]));
}

#[test]
fn test_no_value_columns_rejected() {
    let header = labels(&["label"]);
    assert_eq!(
        parse_data_row(&row(&["1", "2"]), &header),
        Err(RejectionReason::NoValueColumns)
    );
    assert_eq!(
        parse_data_row(&row(&["1"]), &header),
        Err(RejectionReason::NoValueColumns)
    );
    assert_eq!(
        parse_data_row(&row(&[]), &header),
        Err(RejectionReason::NoValueColumns)
    );
}

#[test]
fn test_shape_checked_before_numbers() {
    let header = labels(&["label"]);
    let result = parse_data_row(&row(&["abc", "def"]), &header);
    assert_eq!(result, Err(RejectionReason::NoValueColumns));
}

#[test]
fn test_non_numeric_latitude_rejected() {
    let header = labels(&["label"]);
    let result = parse_data_row(&row(&["abc", "-0.1", "x"]), &header);
    assert_eq!(
        result,
        Err(RejectionReason::InvalidLatitude("abc".to_string()))
    );
}

#[test]
fn test_non_numeric_longitude_rejected() {
    let header = labels(&["label"]);
    let result = parse_data_row(&row(&["51.5", "west", "x"]), &header);
    assert_eq!(
        result,
        Err(RejectionReason::InvalidLongitude("west".to_string()))
    );
}

#[test]
fn test_out_of_range_coordinates_accepted() {
    let header = labels(&["label"]);
    let point = parse_data_row(&row(&["123.4", "-500", "x"]), &header).unwrap();
    assert_eq!(point.latitude, 123.4);
    assert_eq!(point.longitude, -500.0);
}

#[test]
fn test_value_text_kept_verbatim() {
    let header = labels(&["label", "note"]);
    let point = parse_data_row(&row(&["1", "2", "  padded ", ""]), &header).unwrap();
    assert_eq!(point.values, row(&["  padded ", ""]));
}

#[test]
fn test_parse_coordinate() {
    assert_eq!(parse_coordinate("51.5"), Some(51.5));
    assert_eq!(parse_coordinate(" -0.1 "), Some(-0.1));
    assert_eq!(parse_coordinate("1e2"), Some(100.0));
    assert_eq!(parse_coordinate("7"), Some(7.0));
    assert_eq!(parse_coordinate(""), None);
    assert_eq!(parse_coordinate("N51"), None);
    assert_eq!(parse_coordinate("51,5"), None);
    assert_eq!(parse_coordinate("NaN"), None);
    assert_eq!(parse_coordinate("inf"), None);
    assert_eq!(parse_coordinate("-infinity"), None);
}
