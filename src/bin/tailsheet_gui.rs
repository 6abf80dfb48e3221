//! Interactive cheatsheet window (requires `--features egui`).
//!
//! Usage:
//!   cargo run --features egui --bin tailsheet-gui -- data/cheatsheet.json

use std::sync::Arc;

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::Parser;
use eframe::egui;

use tailsheet::egui_app::CheatsheetApp;
use tailsheet::{load_catalogue, logging, SheetConfig, Theme};

#[derive(Parser, Debug)]
#[command(author, version, about = "Browse a CSS utility-class cheatsheet", long_about = None)]
struct Args {
    /// Cheatsheet JSON data file
    #[arg(value_name = "DATA_FILE")]
    data_file: Utf8PathBuf,

    /// Leave out the built-in categories
    #[arg(long)]
    no_builtin: bool,

    /// Number of leading data-file categories to ignore
    #[arg(long, value_name = "N")]
    skip: Option<usize>,

    /// Start in dark mode
    #[arg(long)]
    dark: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let mut config = SheetConfig::default();
    config.include_builtin = !args.no_builtin;
    if let Some(n) = args.skip {
        config.skip_leading = n;
    }

    // Built once before the first frame; a missing or broken file ends the session here.
    let catalogue = Arc::new(
        load_catalogue(&args.data_file, &config)
            .with_context(|| format!("Failed to load {}", args.data_file))?,
    );
    let theme = if args.dark { Theme::Dark } else { Theme::Light };
    let app = CheatsheetApp::new(catalogue, &config).with_theme(theme);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 820.0])
            .with_title("Tailwind CSS Cheatsheet"),
        ..Default::default()
    };
    eframe::run_native(
        "tailsheet",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))?;
    Ok(())
}
