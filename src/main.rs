//! Bestseller Explorer - Bestselling Books CSV Cleaner & Chart Viewer
//!
//! Loads a CSV of bestselling books, cleans the sales, year and genre columns,
//! and shows three exploratory charts, each for a few seconds.

mod analysis;
mod charts;
mod config;
mod data;
mod gui;
mod stats;

use analysis::Analysis;
use anyhow::Context;
use clap::Parser;
use config::Cli;
use gui::ChartSlideshow;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();

    let settings = cli.settings();
    log::debug!("Settings: {:?}", settings);

    let analysis = Analysis::from_settings(&settings)
        .with_context(|| format!("Failed to analyze {}", settings.file_path.display()))?;

    if settings.headless {
        analysis.log_summary();
        return Ok(());
    }

    ChartSlideshow::run(analysis.charts(), settings.display)
        .context("Failed to display charts")?;

    Ok(())
}
