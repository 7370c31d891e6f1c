use super::{display_row, DISPLAY_HEADERS};
use crate::core::{CalculationReport, Summary};
use crate::formatting::{
    format_money, format_percent, format_signed_amount, ColorMode, FormattingConfig,
    OutputFormatter,
};
use crate::io::output::OutputWriter;
use comfy_table::{presets, Cell as TableCell, CellAlignment, Color, Table};
use std::io::Write;

/// Index of "Net profit" in [`DISPLAY_HEADERS`].
const NET_PROFIT_COLUMN: usize = 4;

pub struct TerminalWriter<W: Write> {
    writer: W,
    config: FormattingConfig,
    formatter: Box<dyn OutputFormatter>,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, config: FormattingConfig) -> Self {
        Self {
            writer,
            config,
            formatter: config.formatter(),
        }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &CalculationReport) -> anyhow::Result<()> {
        self.write_cards(report)?;
        self.write_table(report)?;
        self.write_hints(report)?;
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn write_cards(&mut self, report: &CalculationReport) -> anyhow::Result<()> {
        let f = &self.formatter;
        let Summary {
            total_revenue,
            total_net_profit,
            average_roi,
        } = report.summary;

        let trend = f.emoji(if total_net_profit < 0.0 { "▼" } else { "▲" }, "change");

        writeln!(
            self.writer,
            "{} {}",
            f.emoji("📊", "[STATS]"),
            f.header("Session Profitability")
        )?;
        writeln!(self.writer, "{}", "-".repeat(40))?;
        writeln!(
            self.writer,
            "{:<22}{}",
            "Total revenue",
            f.bold(&format_money(total_revenue))
        )?;
        writeln!(
            self.writer,
            "{:<22}{} {}",
            "Total net profit",
            f.by_sign(total_net_profit, &format_money(total_net_profit)),
            f.dim(&format!("({} {})", trend, format_signed_amount(total_net_profit)))
        )?;
        writeln!(
            self.writer,
            "{:<22}{}",
            "Average ROI",
            f.by_sign(average_roi, &format_percent(average_roi))
        )?;
        writeln!(
            self.writer,
            "{}",
            f.dim(&format!(
                "Rates: tax {}, packaging {} | {} session(s)",
                format_percent(report.parameters.tax_rate * 100.0),
                format_percent(report.parameters.packaging_rate * 100.0),
                report.sessions.len()
            ))
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_table(&mut self, report: &CalculationReport) -> anyhow::Result<()> {
        if report.sessions.is_empty() {
            writeln!(self.writer, "No sessions.")?;
            return Ok(());
        }

        let mut table = Table::new();
        if self.config.color == ColorMode::Never {
            table.load_preset(presets::ASCII_FULL);
        } else {
            table.load_preset(presets::UTF8_FULL);
        }
        table.set_header(DISPLAY_HEADERS);
        let colored = self.config.color.should_use_color();

        for session in &report.sessions {
            let net_color = if session.metrics.net_profit < 0.0 {
                Color::Red
            } else {
                Color::Green
            };
            let row = display_row(session)
                .into_iter()
                .enumerate()
                .map(|(i, text)| match i {
                    0 => TableCell::new(text),
                    NET_PROFIT_COLUMN if colored => TableCell::new(text)
                        .set_alignment(CellAlignment::Right)
                        .fg(net_color),
                    _ => TableCell::new(text).set_alignment(CellAlignment::Right),
                })
                .collect::<Vec<_>>();
            table.add_row(row);
        }

        writeln!(self.writer, "{table}")?;
        Ok(())
    }

    fn write_hints(&mut self, report: &CalculationReport) -> anyhow::Result<()> {
        let losing: Vec<_> = report.loss_making().collect();
        if losing.is_empty() {
            return Ok(());
        }

        writeln!(self.writer)?;
        for s in losing {
            let advice = if s.metrics.breakeven_revenue > 0.0 {
                format!(
                    "break-even revenue is {}; revisit rent or staffing",
                    format_money(s.metrics.breakeven_revenue)
                )
            } else {
                "margin does not cover variable costs at any revenue".to_string()
            };
            writeln!(
                self.writer,
                "{} {} loses {}: {}",
                self.formatter.emoji("💡", "[HINT]"),
                self.formatter.bold(&s.session.name),
                self.formatter
                    .loss(&format_money(s.metrics.net_profit.abs())),
                advice
            )?;
        }
        Ok(())
    }
}
