//! Spreadsheet export: every input and derived column, one row per session.

use crate::core::{CalculationReport, EnrichedSession, SessionField};
use crate::io::output::OutputWriter;
use std::io::Write;

/// UTF-8 byte-order mark. Spreadsheet software needs it to read non-ASCII
/// session names correctly.
pub const UTF8_BOM: &str = "\u{feff}";

pub const DERIVED_COLUMNS: [&str; 6] = [
    "gross_profit",
    "variable_cost",
    "fixed_cost_total",
    "net_profit",
    "breakeven_revenue",
    "roi_percent",
];

pub struct CsvWriter<W: Write> {
    writer: W,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

fn header() -> Vec<&'static str> {
    SessionField::ALL
        .iter()
        .map(SessionField::as_str)
        .chain(DERIVED_COLUMNS)
        .collect()
}

fn record(s: &EnrichedSession) -> Vec<String> {
    let r = &s.session;
    let m = &s.metrics;
    let numbers = [
        r.estimated_revenue,
        r.gross_margin_rate,
        r.venue_rent,
        r.onsite_staffing,
        r.utilities_logistics,
        r.advertising_cost,
        r.venue_commission_rate,
        m.gross_profit,
        m.variable_cost,
        m.fixed_cost_total,
        m.net_profit,
        m.breakeven_revenue,
        m.roi_percent,
    ];
    std::iter::once(r.name.clone())
        .chain(numbers.iter().map(f64::to_string))
        .collect()
}

impl<W: Write> OutputWriter for CsvWriter<W> {
    fn write_report(&mut self, report: &CalculationReport) -> anyhow::Result<()> {
        self.writer.write_all(UTF8_BOM.as_bytes())?;

        let mut csv = csv::Writer::from_writer(&mut self.writer);
        csv.write_record(header())?;
        for session in &report.sessions {
            csv.write_record(record(session))?;
        }
        csv.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::writers::test_support::sample_report;

    fn export(report: &CalculationReport) -> String {
        let mut buf = Vec::new();
        CsvWriter::new(&mut buf).write_report(report).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_export_starts_with_bom_and_header() {
        let text = export(&sample_report());
        assert!(text.starts_with(UTF8_BOM));
        let first_line = text.trim_start_matches(UTF8_BOM).lines().next().unwrap();
        assert!(first_line.starts_with("name,estimated_revenue,gross_margin_rate"));
        assert!(first_line.ends_with("breakeven_revenue,roi_percent"));
    }

    #[test]
    fn test_one_row_per_session_with_all_columns() {
        let text = export(&sample_report());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("Taipei A,600000,0.35,120000,"));
        assert_eq!(lines[1].split(',').count(), 14);
    }

    #[test]
    fn test_empty_report_writes_header_only() {
        let mut report = sample_report();
        report.sessions.clear();
        assert_eq!(export(&report).lines().count(), 1);
    }
}
