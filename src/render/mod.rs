//! Text report rendering.
//!
//! The search core hands over collapsed common paths and unique paths; this
//! module turns them into the indented text report printed on stdout. Each
//! path is joined with the configured separator, squeezed through the
//! response-field rule, and indented with one tab per enclosing level.

use crate::search::aggregate::Partition;
use crate::search::collapse::collapse_response_fields;
use crate::search::path::Path;
use std::io::{self, Write};

/// Rendering knobs, filled from config and CLI flags.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Separator between path segments (default ".").
    pub separator: String,
    /// Append occurrence counts to common paths.
    pub show_counts: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            separator: ".".to_string(),
            show_counts: false,
        }
    }
}

/// Renders one path as a report line, indentation included.
fn path_line(path: &Path, count: Option<usize>, options: &RenderOptions) -> String {
    let joined = collapse_response_fields(&path.join(&options.separator));
    let indent = "\t".repeat(path.depth().saturating_sub(1));
    match count {
        Some(n) => format!("{}{} (x{})", indent, joined, n),
        None => format!("{}{}", indent, joined),
    }
}

/// Writes the full report for one search spec.
pub fn write_report<W: Write>(
    out: &mut W,
    spec_text: &str,
    partition: &Partition,
    options: &RenderOptions,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Results for key: {}", spec_text)?;
    writeln!(out, "-------------------------------")?;

    writeln!(out, "Common paths:")?;
    for (path, count) in &partition.common {
        let count = options.show_counts.then_some(*count);
        writeln!(out, "{}", path_line(path, count, options))?;
    }

    if !partition.unique.is_empty() {
        writeln!(out)?;
        writeln!(out, "Unique or specific paths (with their indices):")?;
        for (path, _) in &partition.unique {
            writeln!(out, "{}", path_line(path, None, options))?;
        }
    }

    Ok(())
}
