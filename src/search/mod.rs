//! Key search engine: path discovery, aggregation, and collapsing.
//!
//! This module finds every occurrence of a key in a JSON document and turns
//! the raw matches into a compact report.
//!
//! # Pipeline
//!
//! - [`spec::SearchSpec`] - a literal key name or a `/regex/` pattern
//! - [`walker::find_paths`] - lazy depth-first walk yielding one [`path::Path`]
//!   per matching key
//! - [`aggregate`] - counts distinct paths and splits them into common
//!   (recurring) and unique sets
//! - [`collapse`] - rewrites families of enumerated paths into
//!   `prefix_{1-5}_suffix` / `prefix_{a|b}_suffix` notation
//!
//! # Examples
//!
//! ```
//! // keytrail data.json name          - every path ending in the key "name"
//! // keytrail data.json '/^addr.*/'   - keys starting with "addr"
//! ```

pub mod aggregate;
pub mod collapse;
pub mod error;
pub mod path;
pub mod spec;
pub mod walker;

pub use aggregate::{count_paths, partition_paths, Partition};
pub use collapse::{collapse_families, collapse_group, collapse_response_fields};
pub use error::SearchError;
pub use path::{Path, PathSegment};
pub use spec::SearchSpec;
pub use walker::{find_paths, PathFinder};
