//! Depth-first path discovery.

use super::path::{Path, PathSegment};
use super::spec::SearchSpec;
use crate::document::node::JsonValue;

/// Returns a lazy iterator over the paths of every key matching `spec`.
///
/// The walk is a pre-order depth-first traversal: at an object, each key is
/// tested in insertion order and the extended path is yielded on a match,
/// then the key's value is visited unconditionally (a matching key can still
/// contain further matches). Array elements are visited with an anonymous
/// `*` segment, so sibling elements share one structural path. Scalars end
/// the walk.
///
/// The iterator is restartable: calling `find_paths` again replays the full
/// traversal. Nothing is cached across calls.
pub fn find_paths<'a>(root: &'a JsonValue, spec: &'a SearchSpec) -> PathFinder<'a> {
    PathFinder {
        spec,
        stack: vec![Task::Visit(root, Path::root())],
    }
}

/// Lazy iterator produced by [`find_paths`].
///
/// Uses an explicit worklist rather than call-stack recursion, so document
/// depth is bounded by memory, not the thread stack.
pub struct PathFinder<'a> {
    spec: &'a SearchSpec,
    stack: Vec<Task<'a>>,
}

enum Task<'a> {
    Visit(&'a JsonValue, Path),
    Emit(Path),
}

impl Iterator for PathFinder<'_> {
    type Item = Path;

    fn next(&mut self) -> Option<Path> {
        while let Some(task) = self.stack.pop() {
            match task {
                Task::Emit(path) => return Some(path),
                Task::Visit(value, path) => match value {
                    JsonValue::Object(entries) => {
                        // Reverse so the stack pops entries in insertion order.
                        for (key, child) in entries.iter().rev() {
                            let child_path = path.child(PathSegment::Key(key.clone()));
                            self.stack.push(Task::Visit(child, child_path.clone()));
                            if self.spec.matches(key) {
                                self.stack.push(Task::Emit(child_path));
                            }
                        }
                    }
                    JsonValue::Array(elements) => {
                        for element in elements.iter().rev() {
                            self.stack
                                .push(Task::Visit(element, path.child(PathSegment::AnyElement)));
                        }
                    }
                    // Scalars (and anything else) terminate the walk here.
                    _ => {}
                },
            }
        }
        None
    }
}
