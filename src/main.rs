use std::io::{self, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::Parser;

use tailsheet::report::{write_text, JsonReport};
use tailsheet::search::{search, Query, SearchIndex};
use tailsheet::{load_catalogue, logging, SheetConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Search a CSS utility-class cheatsheet", long_about = None)]
struct Cli {
    /// Cheatsheet JSON data file
    #[arg(value_name = "DATA_FILE")]
    data_file: Utf8PathBuf,

    /// Filter query (case-insensitive substring)
    #[arg(short, long, default_value = "")]
    query: String,

    /// Print the filtered catalogue and expansion set as JSON
    #[arg(long)]
    json: bool,

    /// Leave out the built-in categories
    #[arg(long)]
    no_builtin: bool,

    /// Number of leading data-file categories to ignore
    #[arg(long, value_name = "N")]
    skip: Option<usize>,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut config = SheetConfig::default();
    config.include_builtin = !cli.no_builtin;
    if let Some(n) = cli.skip {
        config.skip_leading = n;
    }

    let catalogue = Arc::new(
        load_catalogue(&cli.data_file, &config)
            .with_context(|| format!("Failed to load {}", cli.data_file))?,
    );
    let index = SearchIndex::build(&catalogue);
    let query = Query::new(&cli.query);
    let outcome = search(&catalogue, &index, &query);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        let report = JsonReport::new(&query, &outcome);
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        write_text(&mut out, &outcome, &config.docs_base)?;
    }
    Ok(())
}
