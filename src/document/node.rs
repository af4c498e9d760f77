//! JSON value representation.
//!
//! This module provides the owned document model that the search engine walks.
//! Objects keep their keys in insertion order (via `IndexMap`) so that
//! discovered paths come out in a stable, source-faithful order. The model is
//! read-only once built; nothing in the crate mutates a loaded document.
//!
//! # Example
//!
//! ```
//! use keytrail::document::node::JsonValue;
//! use indexmap::IndexMap;
//!
//! let mut fields = IndexMap::new();
//! fields.insert("name".to_string(), JsonValue::String("keytrail".to_string()));
//! fields.insert("version".to_string(), JsonValue::Number(1.0));
//! let object = JsonValue::Object(fields);
//!
//! assert!(object.is_object());
//! assert!(object.is_container());
//! ```

use indexmap::IndexMap;

/// A parsed JSON value.
///
/// Objects and arrays contain further `JsonValue` instances; strings, numbers,
/// booleans, and null are the scalar leaves that terminate traversal.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    /// A JSON object with insertion-ordered key-value pairs
    Object(IndexMap<String, JsonValue>),
    /// A JSON array of ordered values
    Array(Vec<JsonValue>),
    /// A JSON string
    String(String),
    /// A JSON number
    Number(f64),
    /// A JSON boolean
    Boolean(bool),
    /// A JSON null value
    Null,
}

impl JsonValue {
    /// Returns true if this value is an object.
    ///
    /// # Example
    ///
    /// ```
    /// use keytrail::document::node::JsonValue;
    /// use indexmap::IndexMap;
    ///
    /// let obj = JsonValue::Object(IndexMap::new());
    /// assert!(obj.is_object());
    ///
    /// let num = JsonValue::Number(42.0);
    /// assert!(!num.is_object());
    /// ```
    pub fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }

    /// Returns true if this value is an array.
    pub fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array(_))
    }

    /// Returns true if this value is a container (object or array).
    ///
    /// Everything else is a scalar and ends recursion during traversal.
    pub fn is_container(&self) -> bool {
        matches!(self, JsonValue::Object(_) | JsonValue::Array(_))
    }
}
