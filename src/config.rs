//! Run configuration: command-line options and their defaults.

use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::time::Duration;

/// Input CSV read when no path is given.
pub const DEFAULT_FILE_PATH: &str = "161-topbooks.csv";
/// Histogram bucket count.
pub const DEFAULT_BINS: usize = 20;
/// Bestseller list size.
pub const DEFAULT_TOP_N: usize = 10;
/// Seconds each chart stays on screen.
pub const DEFAULT_DISPLAY_SECONDS: f64 = 3.0;

#[derive(Parser, Debug)]
#[command(name = "bestseller_explorer")]
#[command(about = "Clean a bestselling-books CSV and show exploratory charts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Input CSV file
    #[arg(env = "BESTSELLERS_CSV", default_value = DEFAULT_FILE_PATH)]
    pub file: PathBuf,

    /// Number of histogram bins
    #[arg(long, default_value_t = DEFAULT_BINS, value_parser = parse_positive)]
    pub bins: usize,

    /// Number of books in the bestseller chart
    #[arg(long = "top-n", default_value_t = DEFAULT_TOP_N, value_parser = parse_positive)]
    pub top_n: usize,

    /// Seconds each chart is displayed
    #[arg(long = "display-seconds", default_value_t = DEFAULT_DISPLAY_SECONDS, value_parser = parse_seconds)]
    pub display_seconds: f64,

    /// Skip the chart window and log a summary of each chart instead
    #[arg(long)]
    pub headless: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Default log filter for the chosen verbosity; `RUST_LOG` overrides it.
    /// Headless runs report through the log, so they start at info.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 if self.headless => "info",
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    pub fn settings(&self) -> Settings {
        Settings {
            file_path: self.file.clone(),
            bins: self.bins,
            top_n: self.top_n,
            display: Duration::from_secs_f64(self.display_seconds),
            headless: self.headless,
        }
    }
}

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub file_path: PathBuf,
    pub bins: usize,
    pub top_n: usize,
    pub display: Duration,
    pub headless: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            file_path: PathBuf::from(DEFAULT_FILE_PATH),
            bins: DEFAULT_BINS,
            top_n: DEFAULT_TOP_N,
            display: Duration::from_secs_f64(DEFAULT_DISPLAY_SECONDS),
            headless: false,
        }
    }
}

fn parse_positive(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

fn parse_seconds(s: &str) -> Result<f64, String> {
    let secs: f64 = s.parse().map_err(|e: std::num::ParseFloatError| e.to_string())?;
    if secs.is_finite() && secs >= 0.0 {
        Ok(secs)
    } else {
        Err("must be a non-negative number of seconds".to_string())
    }
}
