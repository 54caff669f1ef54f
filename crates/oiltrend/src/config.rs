//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;

/// oiltrend — record QC oil measurements and chart recent trends.
#[derive(Parser, Debug)]
#[command(name = "oiltrend", version, about)]
pub struct AppConfig {
    /// Backing data file (CSV, created on first save).
    #[arg(long, default_value = "values.csv", env = "OILTREND_DATA")]
    pub data_file: PathBuf,

    /// Write the full dataset as CSV to PATH and exit.
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Print the dataset to stdout and exit.
    #[arg(long)]
    pub print: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
