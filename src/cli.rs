use crate::io::{InputFormat, OutputFormat, SortKey};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "profitmap")]
#[command(about = "Event session profitability calculator", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Calculate net profit, break-even revenue and ROI per session
    Calc {
        /// Session table (.csv, .json or .toml). Falls back to [[sessions]] in the config
        input: Option<PathBuf>,

        /// Configuration file (defaults to the nearest .profitmap.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Session table format (inferred from the extension by default)
        #[arg(long, value_enum)]
        input_format: Option<InputFormat>,

        /// Invoice tax rate in percent
        #[arg(long = "tax-percent", env = "PROFITMAP_TAX_PERCENT")]
        tax_percent: Option<f64>,

        /// Packaging/consumables rate in percent
        #[arg(long = "packaging-percent", env = "PROFITMAP_PACKAGING_PERCENT")]
        packaging_percent: Option<f64>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Row order for display
        #[arg(long = "sort-by", value_enum)]
        sort_by: Option<SortKey>,

        /// Reverse the row order
        #[arg(long, conflicts_with = "ascending")]
        descending: bool,

        /// Keep the row order ascending even if the config asks for descending
        #[arg(long)]
        ascending: bool,

        /// Plain output: no colors, no emoji
        #[arg(long)]
        plain: bool,
    },

    /// Initialize a profitmap configuration file with sample sessions
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

/// Default log filter for a `-v` count.
pub fn log_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
