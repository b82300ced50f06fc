use chrono::{Local, TimeZone};
use serde_json::{Map, Value, json};
use spotfetch::utils::{browse_timestamp, merge_fields};

#[test]
fn test_browse_timestamp_is_fixed_width() {
    // single-digit month, day, hour, minute and second must be zero-padded
    let clock = Local.with_ymd_and_hms(2024, 3, 7, 4, 5, 9).unwrap();
    assert_eq!(browse_timestamp(clock), "2024-03-07T04:05:09");
}

#[test]
fn test_browse_timestamp_with_two_digit_components() {
    let clock = Local.with_ymd_and_hms(2023, 11, 25, 23, 59, 58).unwrap();
    assert_eq!(browse_timestamp(clock), "2023-11-25T23:59:58");
}

#[test]
fn test_browse_timestamp_shape() {
    let clock = Local.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let rendered = browse_timestamp(clock);

    // YYYY-MM-DDTHH:MM:SS is exactly 19 characters with fixed separators
    assert_eq!(rendered.len(), 19);
    assert_eq!(&rendered[4..5], "-");
    assert_eq!(&rendered[7..8], "-");
    assert_eq!(&rendered[10..11], "T");
    assert_eq!(&rendered[13..14], ":");
    assert_eq!(&rendered[16..17], ":");
}

#[test]
fn test_merge_fields_combines_disjoint_objects() {
    let mut target = Map::new();
    merge_fields(&mut target, json!({ "name": "Tool", "genres": ["metal"] }));
    merge_fields(&mut target, json!({ "tracks": [1, 2, 3] }));

    assert_eq!(target.len(), 3);
    assert_eq!(target["name"], json!("Tool"));
    assert_eq!(target["tracks"], json!([1, 2, 3]));
}

#[test]
fn test_merge_fields_later_merge_wins() {
    let mut target = Map::new();
    merge_fields(&mut target, json!({ "name": "first", "keep": true }));
    merge_fields(&mut target, json!({ "name": "second" }));

    assert_eq!(target["name"], json!("second"));
    assert_eq!(target["keep"], json!(true));
}

#[test]
fn test_merge_fields_ignores_non_objects() {
    let mut target = Map::new();
    merge_fields(&mut target, json!({ "name": "kept" }));
    merge_fields(&mut target, Value::Null);
    merge_fields(&mut target, json!([1, 2]));
    merge_fields(&mut target, json!("scalar"));

    assert_eq!(target.len(), 1);
    assert_eq!(target["name"], json!("kept"));
}
