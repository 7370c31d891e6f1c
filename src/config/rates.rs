use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_PACKAGING_RATE, DEFAULT_TAX_RATE};

/// Global rates applied to every session, in percent (`5.0` means 5%)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatesConfig {
    /// Invoice tax rate in percent
    #[serde(default = "default_tax_percent")]
    pub tax_percent: f64,

    /// Average packaging/consumables rate in percent
    #[serde(default = "default_packaging_percent")]
    pub packaging_percent: f64,
}

impl Default for RatesConfig {
    fn default() -> Self {
        Self {
            tax_percent: default_tax_percent(),
            packaging_percent: default_packaging_percent(),
        }
    }
}

impl RatesConfig {
    /// Apply command-line overrides on top of configured values.
    pub fn with_overrides(self, tax_percent: Option<f64>, packaging_percent: Option<f64>) -> Self {
        Self {
            tax_percent: tax_percent.unwrap_or(self.tax_percent),
            packaging_percent: packaging_percent.unwrap_or(self.packaging_percent),
        }
    }
}

pub fn default_tax_percent() -> f64 {
    DEFAULT_TAX_RATE * 100.0
}

pub fn default_packaging_percent() -> f64 {
    DEFAULT_PACKAGING_RATE * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_core_defaults() {
        let rates = RatesConfig::default();
        assert!((rates.tax_percent / 100.0 - DEFAULT_TAX_RATE).abs() < 1e-12);
        assert_eq!(rates.packaging_percent / 100.0, DEFAULT_PACKAGING_RATE);
    }

    #[test]
    fn test_overrides_take_precedence() {
        let rates = RatesConfig {
            tax_percent: 5.0,
            packaging_percent: 1.0,
        }
        .with_overrides(Some(8.0), None);
        assert_eq!(rates.tax_percent, 8.0);
        assert_eq!(rates.packaging_percent, 1.0);
    }

    #[test]
    fn test_partial_section_uses_field_defaults() {
        let rates: RatesConfig = toml::from_str("packaging_percent = 2.5").unwrap();
        assert_eq!(rates.tax_percent, 5.0);
        assert_eq!(rates.packaging_percent, 2.5);
    }
}
