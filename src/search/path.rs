//! Structural path types.

use std::fmt;

/// A segment in a structural path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A map key
    Key(String),
    /// Any array element (element index is deliberately discarded so that
    /// sibling elements share one structural path)
    AnyElement,
}

impl PathSegment {
    /// Returns the key name, or `"*"` for the element wildcard.
    pub fn as_str(&self) -> &str {
        match self {
            PathSegment::Key(name) => name,
            PathSegment::AnyElement => "*",
        }
    }

    /// Returns the key name if this segment is a map key.
    pub fn key(&self) -> Option<&str> {
        match self {
            PathSegment::Key(name) => Some(name),
            PathSegment::AnyElement => None,
        }
    }
}

/// An ordered list of segments locating a value within a document.
///
/// Paths are built root-first during traversal and never modified afterwards.
///
/// # Example
///
/// ```
/// use keytrail::search::path::{Path, PathSegment};
///
/// let path = Path::root()
///     .child(PathSegment::Key("items".to_string()))
///     .child(PathSegment::AnyElement)
///     .child(PathSegment::Key("name".to_string()));
///
/// assert_eq!(path.to_string(), "items.*.name");
/// assert_eq!(path.depth(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    /// Creates an empty path pointing at the document root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates a path from a list of segments.
    pub fn new(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }

    /// Returns a new path extended with one more segment.
    pub fn child(&self, segment: PathSegment) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }

    /// Returns the segments from root to target.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Returns the number of segments.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Returns the final segment, if any.
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }

    /// Splits the path into its leading segments and the final one.
    ///
    /// Returns `None` for the empty root path.
    pub fn split_last(&self) -> Option<(&[PathSegment], &PathSegment)> {
        self.segments.split_last().map(|(last, rest)| (rest, last))
    }

    /// Renders the path with the given separator between segments.
    pub fn join(&self, separator: &str) -> String {
        self.segments
            .iter()
            .map(PathSegment::as_str)
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.join("."))
    }
}
