use chrono::{DateTime, Local};
use serde_json::{Map, Value};

/// Formats a wall-clock instant as the fixed-width `YYYY-MM-DDTHH:MM:SS`
/// string the browse endpoints take as their `timestamp` parameter.
///
/// The instant is rendered as-is, without timezone conversion: local time
/// presented in the shape the API expects. Taking the instant as an argument
/// keeps the formatting testable against a fixed clock.
pub fn browse_timestamp(now: DateTime<Local>) -> String {
    now.format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// Returns the browse timestamp for the current local time.
pub fn browse_timestamp_now() -> String {
    browse_timestamp(Local::now())
}

/// Shallow field merge of a JSON object into an accumulator.
///
/// Same-named fields are overwritten by the incoming value, later merges win.
/// Non-object values are ignored; an aggregate is only ever assembled from
/// object-shaped response bodies.
pub fn merge_fields(target: &mut Map<String, Value>, patch: Value) {
    if let Value::Object(fields) = patch {
        for (key, value) in fields {
            target.insert(key, value);
        }
    }
}
