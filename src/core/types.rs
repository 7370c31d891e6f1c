//! Plain data types shared by the calculator, the readers and the writers.

use serde::{Deserialize, Serialize};

/// Default invoice tax rate (5%).
pub const DEFAULT_TAX_RATE: f64 = 0.05;

/// Default packaging/consumables rate (0%).
pub const DEFAULT_PACKAGING_RATE: f64 = 0.0;

/// Rates applied to every session of a calculation pass.
///
/// Both rates are fractions of revenue. They are fixed for the duration of a
/// pass and passed explicitly to every calculation function.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlobalParameters {
    pub tax_rate: f64,
    pub packaging_rate: f64,
}

impl Default for GlobalParameters {
    fn default() -> Self {
        Self {
            tax_rate: DEFAULT_TAX_RATE,
            packaging_rate: DEFAULT_PACKAGING_RATE,
        }
    }
}

impl GlobalParameters {
    pub fn new(tax_rate: f64, packaging_rate: f64) -> Self {
        Self {
            tax_rate,
            packaging_rate,
        }
    }

    /// Build from percentages, the unit users type rates in (`5.0` means 5%).
    pub fn from_percent(tax_percent: f64, packaging_percent: f64) -> Self {
        Self::new(tax_percent / 100.0, packaging_percent / 100.0)
    }

    /// Variable-cost rate shared by all sessions (tax + packaging).
    pub fn global_variable_rate(&self) -> f64 {
        self.tax_rate + self.packaging_rate
    }
}

/// One sale event with its own revenue estimate and cost structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub name: String,
    pub estimated_revenue: f64,
    pub gross_margin_rate: f64,
    pub venue_rent: f64,
    pub onsite_staffing: f64,
    pub utilities_logistics: f64,
    pub advertising_cost: f64,
    pub venue_commission_rate: f64,
}

impl SessionRecord {
    /// Total rate of revenue lost to tax, packaging and venue commission.
    pub fn variable_rate(&self, params: &GlobalParameters) -> f64 {
        params.global_variable_rate() + self.venue_commission_rate
    }

    /// Costs that do not scale with revenue.
    pub fn fixed_cost_total(&self) -> f64 {
        self.venue_rent + self.onsite_staffing + self.utilities_logistics + self.advertising_cost
    }
}

/// Figures computed from a [`SessionRecord`]; never edited by users.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    pub gross_profit: f64,
    pub variable_cost: f64,
    pub fixed_cost_total: f64,
    pub net_profit: f64,
    /// Revenue at which net profit is zero; 0 when no finite break-even exists.
    pub breakeven_revenue: f64,
    /// Net profit over total estimated cost, in percent; 0 when cost is 0.
    pub roi_percent: f64,
}

/// A session together with its derived metrics.
///
/// Serializes flat, input fields first, so JSON consumers see one object per row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedSession {
    #[serde(flatten)]
    pub session: SessionRecord,
    #[serde(flatten)]
    pub metrics: DerivedMetrics,
}

/// Aggregates over every session of a pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_revenue: f64,
    pub total_net_profit: f64,
    /// Mean ROI across sessions; 0 for an empty session list.
    pub average_roi: f64,
}

/// Everything a presentation or export sink needs from one pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationReport {
    pub parameters: GlobalParameters,
    pub sessions: Vec<EnrichedSession>,
    pub summary: Summary,
}

impl CalculationReport {
    /// Sessions whose net profit is negative, in input order.
    pub fn loss_making(&self) -> impl Iterator<Item = &EnrichedSession> {
        self.sessions.iter().filter(|s| s.metrics.net_profit < 0.0)
    }
}
