//! Path counting and common/unique partitioning.

use super::path::Path;
use indexmap::IndexMap;

/// The two halves of a partitioned path multiset.
///
/// `common` holds paths discovered more than once (typically once per sibling
/// array element); `unique` holds paths discovered exactly once. Both keep
/// first-seen discovery order and carry their occurrence counts, so together
/// they reconstruct the full multiset of matches.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Partition {
    pub common: Vec<(Path, usize)>,
    pub unique: Vec<(Path, usize)>,
}

impl Partition {
    /// Total number of matches across both sets.
    pub fn total_matches(&self) -> usize {
        self.common.iter().map(|(_, n)| n).sum::<usize>()
            + self.unique.iter().map(|(_, n)| n).sum::<usize>()
    }

    /// True when neither set holds any path.
    pub fn is_empty(&self) -> bool {
        self.common.is_empty() && self.unique.is_empty()
    }
}

/// Counts occurrences of each distinct path, in first-seen order.
pub fn count_paths<I>(paths: I) -> IndexMap<Path, usize>
where
    I: IntoIterator<Item = Path>,
{
    let mut counts: IndexMap<Path, usize> = IndexMap::new();
    for path in paths {
        *counts.entry(path).or_insert(0) += 1;
    }
    counts
}

/// Splits counted paths into common (count > 1) and unique (count == 1) sets.
pub fn partition_paths(counts: IndexMap<Path, usize>) -> Partition {
    let mut partition = Partition::default();
    for (path, count) in counts {
        if count == 1 {
            partition.unique.push((path, count));
        } else {
            partition.common.push((path, count));
        }
    }
    partition
}
