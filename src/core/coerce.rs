//! Ingestion boundary: loosely typed table cells to numeric session records.
//!
//! Rows arrive from spreadsheets, CSV files and hand-written config, so any
//! numeric column may hold a blank, a typo or a boolean. Coercion turns each
//! such cell into a finite `f64` exactly once; anything that is not a number
//! becomes `0.0`. Nothing past this module sees an unparsed value.

use super::types::SessionRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single cell as it was entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
    /// Booleans are not amounts; they coerce to `0.0`, never `1.0`.
    Flag(bool),
}

impl Cell {
    /// Parse-or-zero. Non-finite values count as unparseable.
    pub fn coerce(&self) -> f64 {
        let value = match self {
            Cell::Number(n) => *n,
            Cell::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
            Cell::Flag(_) => 0.0,
        };
        if value.is_finite() {
            value
        } else {
            0.0
        }
    }

    /// Text form of the cell, used for the free-text `name` column.
    pub fn as_label(&self) -> String {
        match self {
            Cell::Number(n) => n.to_string(),
            Cell::Text(s) => s.trim().to_string(),
            Cell::Flag(b) => b.to_string(),
        }
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

/// Coerce a possibly missing cell; a missing cell is `0.0`.
pub fn coerce_cell(cell: Option<&Cell>) -> f64 {
    cell.map_or(0.0, Cell::coerce)
}

/// Columns of the session table, in display/export order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionField {
    Name,
    EstimatedRevenue,
    GrossMarginRate,
    VenueRent,
    OnsiteStaffing,
    UtilitiesLogistics,
    AdvertisingCost,
    VenueCommissionRate,
}

impl SessionField {
    pub const ALL: [SessionField; 8] = [
        SessionField::Name,
        SessionField::EstimatedRevenue,
        SessionField::GrossMarginRate,
        SessionField::VenueRent,
        SessionField::OnsiteStaffing,
        SessionField::UtilitiesLogistics,
        SessionField::AdvertisingCost,
        SessionField::VenueCommissionRate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionField::Name => "name",
            SessionField::EstimatedRevenue => "estimated_revenue",
            SessionField::GrossMarginRate => "gross_margin_rate",
            SessionField::VenueRent => "venue_rent",
            SessionField::OnsiteStaffing => "onsite_staffing",
            SessionField::UtilitiesLogistics => "utilities_logistics",
            SessionField::AdvertisingCost => "advertising_cost",
            SessionField::VenueCommissionRate => "venue_commission_rate",
        }
    }

    /// Match a table header, ignoring case and surrounding whitespace.
    pub fn from_header(header: &str) -> Option<Self> {
        let header = header.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|f| f.as_str() == header)
    }
}

impl fmt::Display for SessionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A session row before coercion. Every column may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSessionRow {
    pub name: Option<Cell>,
    pub estimated_revenue: Option<Cell>,
    pub gross_margin_rate: Option<Cell>,
    pub venue_rent: Option<Cell>,
    pub onsite_staffing: Option<Cell>,
    pub utilities_logistics: Option<Cell>,
    pub advertising_cost: Option<Cell>,
    pub venue_commission_rate: Option<Cell>,
}

impl RawSessionRow {
    pub fn set(&mut self, field: SessionField, cell: Cell) {
        let slot = match field {
            SessionField::Name => &mut self.name,
            SessionField::EstimatedRevenue => &mut self.estimated_revenue,
            SessionField::GrossMarginRate => &mut self.gross_margin_rate,
            SessionField::VenueRent => &mut self.venue_rent,
            SessionField::OnsiteStaffing => &mut self.onsite_staffing,
            SessionField::UtilitiesLogistics => &mut self.utilities_logistics,
            SessionField::AdvertisingCost => &mut self.advertising_cost,
            SessionField::VenueCommissionRate => &mut self.venue_commission_rate,
        };
        *slot = Some(cell);
    }

    pub fn with(mut self, field: SessionField, cell: impl Into<Cell>) -> Self {
        self.set(field, cell.into());
        self
    }

    pub fn coerce(&self) -> SessionRecord {
        SessionRecord {
            name: self.name.as_ref().map(Cell::as_label).unwrap_or_default(),
            estimated_revenue: coerce_cell(self.estimated_revenue.as_ref()),
            gross_margin_rate: coerce_cell(self.gross_margin_rate.as_ref()),
            venue_rent: coerce_cell(self.venue_rent.as_ref()),
            onsite_staffing: coerce_cell(self.onsite_staffing.as_ref()),
            utilities_logistics: coerce_cell(self.utilities_logistics.as_ref()),
            advertising_cost: coerce_cell(self.advertising_cost.as_ref()),
            venue_commission_rate: coerce_cell(self.venue_commission_rate.as_ref()),
        }
    }
}

pub fn coerce_rows(rows: &[RawSessionRow]) -> Vec<SessionRecord> {
    rows.iter().map(RawSessionRow::coerce).collect()
}
