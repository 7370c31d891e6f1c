use super::{display_row, DISPLAY_HEADERS};
use crate::core::CalculationReport;
use crate::formatting::{format_money, format_percent};
use crate::io::output::OutputWriter;
use chrono::Utc;
use std::io::Write;

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &CalculationReport) -> anyhow::Result<()> {
        let writers: Vec<fn(&mut Self, &CalculationReport) -> anyhow::Result<()>> = vec![
            |w, r| w.write_header(r),
            |w, r| w.write_summary(r),
            |w, r| w.write_sessions(r),
            |w, r| w.write_loss_notes(r),
        ];

        writers.iter().try_for_each(|writer| writer(self, report))
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, report: &CalculationReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Session Profitability Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(
            self.writer,
            "Rates: tax {}, packaging {}",
            format_percent(report.parameters.tax_rate * 100.0),
            format_percent(report.parameters.packaging_rate * 100.0)
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, report: &CalculationReport) -> anyhow::Result<()> {
        let summary = &report.summary;
        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| Sessions | {} |", report.sessions.len())?;
        writeln!(
            self.writer,
            "| Total revenue | {} |",
            format_money(summary.total_revenue)
        )?;
        writeln!(
            self.writer,
            "| Total net profit | {} |",
            format_money(summary.total_net_profit)
        )?;
        writeln!(
            self.writer,
            "| Average ROI | {} |",
            format_percent(summary.average_roi)
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_sessions(&mut self, report: &CalculationReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Sessions")?;
        writeln!(self.writer)?;
        if report.sessions.is_empty() {
            writeln!(self.writer, "_No sessions._")?;
            writeln!(self.writer)?;
            return Ok(());
        }

        writeln!(self.writer, "| {} |", DISPLAY_HEADERS.join(" | "))?;
        let rule: Vec<&str> = DISPLAY_HEADERS
            .iter()
            .enumerate()
            .map(|(i, _)| if i == 0 { "---" } else { "---:" })
            .collect();
        writeln!(self.writer, "|{}|", rule.join("|"))?;

        for session in &report.sessions {
            let cells = display_row(session).map(|c| escape_cell(&c));
            writeln!(self.writer, "| {} |", cells.join(" | "))?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_loss_notes(&mut self, report: &CalculationReport) -> anyhow::Result<()> {
        let losing: Vec<_> = report.loss_making().collect();
        if losing.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## Loss-making sessions")?;
        writeln!(self.writer)?;
        for s in losing {
            let target = if s.metrics.breakeven_revenue > 0.0 {
                format!(
                    "needs {} revenue to break even",
                    format_money(s.metrics.breakeven_revenue)
                )
            } else {
                "margin does not cover variable costs; revisit pricing or commission".to_string()
            };
            writeln!(
                self.writer,
                "- **{}**: {} net, {}",
                escape_cell(&s.session.name),
                format_money(s.metrics.net_profit),
                target
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::writers::test_support::sample_report;

    fn render(report: &CalculationReport) -> String {
        let mut buf = Vec::new();
        MarkdownWriter::new(&mut buf).write_report(report).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_report_sections() {
        let md = render(&sample_report());
        assert!(md.starts_with("# Session Profitability Report"));
        assert!(md.contains("Rates: tax 5.0%, packaging 0.0%"));
        assert!(md.contains("| Total revenue | $1,000,000 |"));
        assert!(md.contains("| Total net profit | -$3,000 |"));
        assert!(md.contains(
            "| Taipei A | $600,000 | $210,000 | $190,000 | -$40,000 | $760,000 |"
        ));
    }

    #[test]
    fn test_loss_notes_point_to_breakeven() {
        let md = render(&sample_report());
        assert!(md.contains("## Loss-making sessions"));
        assert!(md.contains("- **Taipei A**: -$40,000 net, needs $760,000 revenue to break even"));
        assert!(!md.contains("- **Taichung B**"));
    }

    #[test]
    fn test_empty_report() {
        let mut report = sample_report();
        report.sessions.clear();
        let md = render(&report);
        assert!(md.contains("_No sessions._"));
        assert!(!md.contains("Loss-making"));
    }

    #[test]
    fn test_pipes_in_names_are_escaped() {
        assert_eq!(escape_cell("A|B"), "A\\|B");
    }
}
