//! JSON parsing into the document model.
//!
//! The heavy lifting is done by `serde_json`; this module converts the parsed
//! `serde_json::Value` tree into our insertion-ordered [`JsonValue`] model.
//!
//! # Example
//!
//! ```
//! use keytrail::document::parser::parse_json;
//!
//! let doc = parse_json(r#"{"name": "Alice", "age": 30}"#).unwrap();
//! assert!(doc.is_object());
//! ```

use super::node::JsonValue;
use anyhow::{Context, Result};
use serde_json::Value as SerdeValue;

/// Parses a JSON string into a [`JsonValue`] document.
///
/// # Errors
///
/// Returns an error if the input is not valid JSON.
pub fn parse_json(json_str: &str) -> Result<JsonValue> {
    let serde_value: SerdeValue = serde_json::from_str(json_str).context("Failed to parse JSON")?;
    Ok(parse_value(&serde_value))
}

/// Converts a `serde_json::Value` into a [`JsonValue`].
///
/// Object keys keep the order `serde_json` hands them over in, which with the
/// `preserve_order` feature is the order they appear in the source document.
pub fn parse_value(value: &SerdeValue) -> JsonValue {
    match value {
        SerdeValue::Object(map) => {
            let entries = map
                .iter()
                .map(|(k, v)| (k.clone(), parse_value(v)))
                .collect();
            JsonValue::Object(entries)
        }
        SerdeValue::Array(arr) => {
            let elements = arr.iter().map(parse_value).collect();
            JsonValue::Array(elements)
        }
        SerdeValue::String(s) => JsonValue::String(s.clone()),
        SerdeValue::Number(n) => JsonValue::Number(n.as_f64().unwrap_or(0.0)),
        SerdeValue::Bool(b) => JsonValue::Boolean(*b),
        SerdeValue::Null => JsonValue::Null,
    }
}
