//! Search specs: literal key names and `/regex/` patterns.

use super::error::SearchError;
use regex::Regex;

/// What to look for in a document.
///
/// The raw spec string is classified once, at parse time: a string bounded by
/// `/` on both sides is a regular-expression pattern, anything else is a
/// literal key name. Pattern bodies are compiled immediately so a bad pattern
/// fails before any traversal starts.
///
/// Patterns are anchored at the start of the key but need not consume it, so
/// `/addr/` matches `address1` while `/ress/` does not.
///
/// # Example
///
/// ```
/// use keytrail::search::spec::SearchSpec;
///
/// let literal = SearchSpec::parse("name").unwrap();
/// assert!(literal.matches("name"));
/// assert!(!literal.matches("names"));
///
/// let pattern = SearchSpec::parse("/^addr.*/").unwrap();
/// assert!(pattern.matches("address1"));
/// assert!(!pattern.matches("name"));
/// ```
#[derive(Debug, Clone)]
pub enum SearchSpec {
    /// An exact key name
    Literal(String),
    /// A compiled regular expression, matched against key prefixes
    Pattern(Regex),
}

impl SearchSpec {
    /// Classifies and compiles a raw spec string.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::MalformedSpec`] when the delimiter-stripped body
    /// of a pattern spec fails to compile.
    pub fn parse(raw: &str) -> Result<Self, SearchError> {
        if let Some(body) = pattern_body(raw) {
            // Wrap in a non-capturing group so alternations stay anchored.
            let anchored = format!("^(?:{})", body);
            let regex = Regex::new(&anchored).map_err(|e| SearchError::MalformedSpec {
                spec: raw.to_string(),
                message: e.to_string(),
            })?;
            Ok(SearchSpec::Pattern(regex))
        } else {
            Ok(SearchSpec::Literal(raw.to_string()))
        }
    }

    /// Tests a single map key against this spec.
    pub fn matches(&self, key: &str) -> bool {
        match self {
            SearchSpec::Literal(name) => key == name,
            SearchSpec::Pattern(regex) => regex.is_match(key),
        }
    }

    /// Returns the raw spec text for display purposes.
    pub fn describe(&self) -> String {
        match self {
            SearchSpec::Literal(name) => name.clone(),
            SearchSpec::Pattern(regex) => {
                // Strip the anchoring wrapper added at parse time.
                let body = regex
                    .as_str()
                    .strip_prefix("^(?:")
                    .and_then(|s| s.strip_suffix(')'))
                    .unwrap_or(regex.as_str());
                format!("/{}/", body)
            }
        }
    }
}

/// Returns the pattern body when the raw spec uses the `/.../` convention.
///
/// A lone `/` is a literal; the convention needs both delimiters.
fn pattern_body(raw: &str) -> Option<&str> {
    if raw.len() >= 2 && raw.starts_with('/') && raw.ends_with('/') {
        Some(&raw[1..raw.len() - 1])
    } else {
        None
    }
}
