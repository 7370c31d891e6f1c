// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod formatting;
pub mod io;

// Re-export commonly used types
pub use crate::core::{
    calculate, calculate_raw, CalculationReport, Cell, DerivedMetrics, EnrichedSession,
    GlobalParameters, RawSessionRow, SessionRecord, Summary,
};

pub use crate::config::{load_config, ProfitmapConfig, RatesConfig};

pub use crate::errors::{ProfitmapError, Result};

pub use crate::io::{
    create_writer, read_session_table, InputFormat, OutputFormat, OutputWriter, SortKey,
};
