//! Error types for the I/O and configuration boundary.
//!
//! The calculator itself never fails: malformed cells become zero and
//! degenerate ratios become zero. Only reading input tables, loading
//! configuration and writing reports can produce a [`ProfitmapError`].

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProfitmapError>;

#[derive(Debug, Error)]
pub enum ProfitmapError {
    /// Reading or writing a file failed.
    #[error("failed to access '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The CSV table is structurally broken (not a bad cell, a bad file).
    #[error("malformed CSV session table: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed JSON session table: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// The input path has an extension we cannot infer a reader from.
    #[error("cannot infer session table format from '{}' (expected .csv, .json or .toml)", .path.display())]
    UnsupportedInput { path: PathBuf },

    #[error("config error: {message}")]
    Config { message: String },

    /// Every problem found while validating global rates.
    #[error("invalid rates: {}", .0.join("; "))]
    InvalidRates(Vec<String>),

    #[error("no sessions to calculate: pass a session table or add [[sessions]] to .profitmap.toml")]
    NoSessions,
}

impl ProfitmapError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
