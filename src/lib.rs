//! keytrail - find every path to a key in a JSON document.
//!
//! The library walks an arbitrarily nested JSON document looking for map keys
//! that match a search spec (a literal key name or a `/regex/` pattern),
//! reports the structural path to each occurrence, counts how often each
//! distinct path recurs, and collapses families of enumerated paths
//! (`item_1_field`, `item_2_field`, ...) into compact `{1-5}` / `{a|b}`
//! notation.

pub mod config;
pub mod document;
pub mod file;
pub mod render;
pub mod search;
