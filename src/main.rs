#![forbid(unsafe_code)]

mod assignment;
mod bubbles;
mod card;
mod carousel;
mod catalog;
mod config;
mod constants;
mod editor;
mod fields;
mod format;
mod gui;
mod swipe;
mod types;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{Level as TraceLevel, error, info};
use tracing_subscriber::FmtSubscriber;

use catalog::Catalog;
use config::Settings;

/// Audiobook carousel with a drag-and-drop card field editor
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Settings file (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Book catalogue JSON, overrides `catalog_path` from settings
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// trace, debug, info, warn or error (overrides LOG_LEVEL)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Print the effective settings as JSON and exit
    #[arg(long)]
    print_config: bool,
}

fn parse_level(raw: &str) -> TraceLevel {
    match raw.to_lowercase().as_str() {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    }
}

fn load_catalog(cli: &Cli, settings: &Settings) -> Result<Catalog> {
    match cli.catalog.as_ref().or(settings.catalog_path.as_ref()) {
        Some(path) => Catalog::load(path),
        None => Catalog::sample(),
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings_path = cli.config.clone().unwrap_or_else(Settings::default_path);
    let settings = Settings::load_or_create(&settings_path)?;

    if cli.print_config {
        let json = serde_json::to_string_pretty(&settings).context("Failed to serialize settings")?;
        println!("{json}");
        return Ok(());
    }

    let catalog = load_catalog(&cli, &settings)?;
    info!(books = catalog.len(), fields = ?settings.default_fields, "Starting audiobook carousel");

    gui::run_gui(settings, catalog)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Parse log level from the command line or environment variable
    let log_level = parse_level(
        &cli.log_level
            .clone()
            .or_else(|| std::env::var("LOG_LEVEL").ok())
            .unwrap_or_else(|| "info".to_string()),
    );

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    if let Err(err) = run(cli) {
        error!(error = ?err, "Audiobook carousel failed");
        return Err(err.into());
    }
    Ok(())
}
