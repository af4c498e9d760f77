use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};

use keytrail::config::Config;
use keytrail::file::loader::{load_json_file, load_json_from_stdin};
use keytrail::render::{write_report, RenderOptions};
use keytrail::search::{collapse_families, count_paths, find_paths, partition_paths, SearchSpec};

/// keytrail - find every path to a key in a JSON document
#[derive(Parser)]
#[command(name = "keytrail")]
#[command(version)]
#[command(about = "Find every path to a key in a JSON document", long_about = None)]
struct Cli {
    /// JSON file to search ("-" reads from stdin; .gz and .jsonl supported)
    file: String,

    /// Keys to search for: literal names or /regex/ patterns
    #[arg(required = true)]
    keys: Vec<String>,

    /// Leave enumerated path families uncollapsed
    #[arg(long)]
    no_collapse: bool,

    /// Append occurrence counts to common paths
    #[arg(long)]
    counts: bool,

    /// Separator between path segments in output
    #[arg(long)]
    separator: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load();

    // CLI flags override config defaults.
    let collapse = config.collapse && !cli.no_collapse;
    let options = RenderOptions {
        separator: cli.separator.unwrap_or(config.separator),
        show_counts: cli.counts || config.show_counts,
    };

    let document = if cli.file == "-" {
        load_json_from_stdin()?
    } else {
        load_json_file(&cli.file)?
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for raw_key in &cli.keys {
        // A bad pattern aborts this key only; the rest of the batch continues.
        let spec = match SearchSpec::parse(raw_key) {
            Ok(spec) => spec,
            Err(err) => {
                eprintln!("Warning: skipping '{}': {}", raw_key, err);
                continue;
            }
        };

        let counts = count_paths(find_paths(&document, &spec));
        let mut partition = partition_paths(counts);
        if collapse {
            partition.common = collapse_families(partition.common);
        }

        write_report(&mut out, &spec.describe(), &partition, &options)?;
    }

    out.flush()?;
    Ok(())
}
