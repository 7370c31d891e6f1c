//! The session profitability calculator.
//!
//! `coerce` turns loosely typed rows into [`SessionRecord`]s, `calc` derives
//! per-session metrics and the summary. Neither does I/O and neither can fail.

pub mod calc;
pub mod coerce;
pub mod types;

pub use calc::{
    breakeven_revenue, calculate, calculate_raw, derive_metrics, enrich_sessions, roi_percent,
    summarize,
};
pub use coerce::{coerce_cell, coerce_rows, Cell, RawSessionRow, SessionField};
pub use types::{
    CalculationReport, DerivedMetrics, EnrichedSession, GlobalParameters, SessionRecord, Summary,
    DEFAULT_PACKAGING_RATE, DEFAULT_TAX_RATE,
};
