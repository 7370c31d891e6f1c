//! CLI command implementations.
//!
//! - **calc**: Calculate per-session metrics and the summary for a session table
//! - **init**: Write a starter `.profitmap.toml`

pub mod calc;
pub mod init;

pub use calc::{handle_calc, render_report, CalcConfig};
pub use init::{init_config, init_config_at, DEFAULT_CONFIG};
