use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG: &str = r#"# Profitmap Configuration

[rates]
# Invoice tax rate in percent
tax_percent = 5.0
# Average packaging/consumables rate in percent
packaging_percent = 0.0

[output]
default_format = "terminal"
sort_by = "input"
descending = false

# Sessions used by `profitmap calc` when no session table is given.
[[sessions]]
name = "Taipei A"
estimated_revenue = 600000
gross_margin_rate = 0.35
venue_rent = 120000
onsite_staffing = 45000
utilities_logistics = 5000
advertising_cost = 20000
venue_commission_rate = 0.05

[[sessions]]
name = "Taichung B"
estimated_revenue = 400000
gross_margin_rate = 0.40
venue_rent = 60000
onsite_staffing = 30000
utilities_logistics = 3000
advertising_cost = 10000
venue_commission_rate = 0.00
"#;

pub fn init_config(force: bool) -> Result<()> {
    init_config_at(&PathBuf::from(CONFIG_FILE_NAME), force)?;
    println!("Created {CONFIG_FILE_NAME} configuration file");
    Ok(())
}

pub fn init_config_at(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(config_path, DEFAULT_CONFIG)?;
    log::info!("Wrote default configuration to {}", config_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_config, validate_rates_result};
    use crate::core::calculate_raw;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_calculates_sample_sessions() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        let params = validate_rates_result(&config.rates()).unwrap();
        let report = calculate_raw(&config.sessions, &params);

        assert_eq!(report.sessions.len(), 2);
        assert_eq!(report.sessions[0].session.name, "Taipei A");
        assert!((report.sessions[0].metrics.net_profit + 40000.0).abs() < 1e-6);
        assert!((report.sessions[1].metrics.net_profit - 37000.0).abs() < 1e-6);
    }

    #[test]
    fn test_refuses_to_overwrite_without_force() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "# mine").unwrap();

        assert!(init_config_at(&path, false).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "# mine");

        init_config_at(&path, true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }
}
