pub mod csv_export;
pub mod json;
pub mod markdown;
pub mod terminal;

pub use csv_export::CsvWriter;
pub use json::JsonWriter;
pub use markdown::MarkdownWriter;
pub use terminal::TerminalWriter;

use crate::core::EnrichedSession;
use crate::formatting::{format_money, format_percent};

/// Columns shown in terminal and Markdown detail tables.
pub(crate) const DISPLAY_HEADERS: [&str; 7] = [
    "Session",
    "Est. revenue",
    "Gross profit",
    "Fixed costs",
    "Net profit",
    "Break-even revenue",
    "ROI",
];

pub(crate) fn display_row(s: &EnrichedSession) -> [String; 7] {
    [
        s.session.name.clone(),
        format_money(s.session.estimated_revenue),
        format_money(s.metrics.gross_profit),
        format_money(s.metrics.fixed_cost_total),
        format_money(s.metrics.net_profit),
        format_money(s.metrics.breakeven_revenue),
        format_percent(s.metrics.roi_percent),
    ]
}
