//! Configuration: `.profitmap.toml` discovery, rates and output defaults.
//!
//! A config file may also carry `[[sessions]]`, which `profitmap calc` uses
//! when no session table is given on the command line.

mod core;
mod loader;
mod rates;
pub mod validation;

pub use self::core::{OutputConfig, ProfitmapConfig};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from, parse_config,
    CONFIG_FILE_NAME,
};
pub use rates::{default_packaging_percent, default_tax_percent, RatesConfig};
pub use validation::{validate_percent, validate_rates, validate_rates_result};
