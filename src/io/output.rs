use crate::core::{CalculationReport, EnrichedSession};
use crate::formatting::FormattingConfig;
use crate::io::writers::{CsvWriter, JsonWriter, MarkdownWriter, TerminalWriter};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::io::Write;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Summary cards and a detail table
    Terminal,
    Markdown,
    Json,
    /// Full export, one row per session
    Csv,
}

/// Row order for presentation. The calculator itself always keeps input order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Input,
    Name,
    Revenue,
    NetProfit,
    Roi,
}

impl SortKey {
    fn compare(&self, a: &EnrichedSession, b: &EnrichedSession) -> Ordering {
        match self {
            SortKey::Input => Ordering::Equal,
            SortKey::Name => a.session.name.cmp(&b.session.name),
            SortKey::Revenue => a
                .session
                .estimated_revenue
                .total_cmp(&b.session.estimated_revenue),
            SortKey::NetProfit => a.metrics.net_profit.total_cmp(&b.metrics.net_profit),
            SortKey::Roi => a.metrics.roi_percent.total_cmp(&b.metrics.roi_percent),
        }
    }
}

/// Reorder rows for display. Stable, so ties keep input order.
pub fn sort_sessions(
    mut report: CalculationReport,
    key: SortKey,
    descending: bool,
) -> CalculationReport {
    if key == SortKey::Input {
        if descending {
            report.sessions.reverse();
        }
        return report;
    }

    report.sessions.sort_by(|a, b| {
        let ord = key.compare(a, b);
        if descending {
            ord.reverse()
        } else {
            ord
        }
    });
    report
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &CalculationReport) -> anyhow::Result<()>;
}

pub fn create_writer<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
    formatting: FormattingConfig,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, formatting)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Csv => Box::new(CsvWriter::new(writer)),
    }
}
