use serde::{Deserialize, Serialize};

use super::rates::RatesConfig;
use crate::core::RawSessionRow;
use crate::io::output::{OutputFormat, SortKey};

/// Root configuration structure for profitmap (`.profitmap.toml`)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProfitmapConfig {
    /// Global tax and packaging rates
    #[serde(default)]
    pub rates: Option<RatesConfig>,

    /// Output defaults
    #[serde(default)]
    pub output: Option<OutputConfig>,

    /// Sessions used when no session table is passed on the command line
    #[serde(default)]
    pub sessions: Vec<RawSessionRow>,
}

impl ProfitmapConfig {
    pub fn rates(&self) -> RatesConfig {
        self.rates.unwrap_or_default()
    }

    pub fn output(&self) -> OutputConfig {
        self.output.clone().unwrap_or_default()
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Format used when `--format` is not given
    #[serde(default)]
    pub default_format: Option<OutputFormat>,

    /// Row order used when `--sort-by` is not given
    #[serde(default)]
    pub sort_by: Option<SortKey>,

    /// Sort descending by default
    #[serde(default)]
    pub descending: bool,
}
