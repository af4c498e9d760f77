//! JSON file loading.
//!
//! Loads documents from files or stdin into the [`JsonValue`] model.
//! Gzipped input (`*.gz`, or gzip magic bytes on stdin) is decompressed
//! transparently, and JSONL (`*.jsonl` / `*.ndjson`) parses line by line into
//! a synthetic top-level array so each record contributes a leading `*`
//! segment to discovered paths.

use crate::document::node::JsonValue;
use crate::document::parser::{parse_json, parse_value};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Loads and parses a JSON (or JSONL, optionally gzipped) file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, decompressed, or parsed.
pub fn load_json_file<P: AsRef<Path>>(path: P) -> Result<JsonValue> {
    let path_ref = path.as_ref();

    let is_gzipped = path_ref
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let content = if is_gzipped {
        read_gzipped_file(path_ref)?
    } else {
        fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read {}", path_ref.display()))?
    };

    if is_jsonl_path(path_ref) {
        parse_jsonl_content(&content)
    } else {
        parse_json(&content).with_context(|| format!("Failed to parse {}", path_ref.display()))
    }
}

/// Loads and parses JSON from standard input.
///
/// Reads to EOF, decompresses if the bytes start with the gzip magic, then
/// tries regular JSON first and falls back to JSONL.
pub fn load_json_from_stdin() -> Result<JsonValue> {
    use std::io::{self, Read};

    let mut buffer = Vec::new();
    io::stdin()
        .read_to_end(&mut buffer)
        .context("Failed to read from stdin")?;

    let content = if buffer.starts_with(&[0x1f, 0x8b]) {
        decompress_gzip_bytes(&buffer)?
    } else {
        String::from_utf8(buffer).context("Invalid UTF-8 in stdin")?
    };

    if let Ok(doc) = parse_json(&content) {
        return Ok(doc);
    }

    parse_jsonl_content(&content)
        .context("Failed to parse stdin: input is neither valid JSON nor valid JSONL")
}

/// Parses JSONL content into a synthetic top-level array.
///
/// Each line must be a valid JSON value. Blank lines are skipped.
pub fn parse_jsonl_content(content: &str) -> Result<JsonValue> {
    let mut lines = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let value: serde_json::Value = serde_json::from_str(line)
            .with_context(|| format!("Invalid JSON on line {}", line_num + 1))?;
        lines.push(parse_value(&value));
    }

    if lines.is_empty() {
        anyhow::bail!("No valid JSON found in JSONL content");
    }

    Ok(JsonValue::Array(lines))
}

/// Determines if a file is JSONL format based on its name.
///
/// Checks for a .jsonl or .ndjson extension, handling a .gz suffix correctly:
/// `data.jsonl.gz` is JSONL, `data.json.gz` is not.
fn is_jsonl_path<P: AsRef<Path>>(path: P) -> bool {
    let path_str = path.as_ref().to_string_lossy();

    let base = path_str.strip_suffix(".gz").unwrap_or(&path_str);

    base.ends_with(".jsonl") || base.ends_with(".ndjson")
}

fn read_gzipped_file<P: AsRef<Path>>(path: P) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let file = fs::File::open(path).context("Failed to open gzipped file")?;
    let mut decoder = GzDecoder::new(file);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped file - file may be corrupted")?;
    Ok(content)
}

fn decompress_gzip_bytes(bytes: &[u8]) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let mut decoder = GzDecoder::new(bytes);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped stdin")?;
    Ok(content)
}
