use crate::core::CalculationReport;
use crate::io::output::OutputWriter;
use std::io::Write;

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &CalculationReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::writers::test_support::sample_report;

    #[test]
    fn test_sessions_serialize_flat() {
        let mut buf = Vec::new();
        JsonWriter::new(&mut buf)
            .write_report(&sample_report())
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        let first = &value["sessions"][0];
        assert_eq!(first["name"], "Taipei A");
        assert_eq!(first["estimated_revenue"], 600000.0);
        assert!(first["net_profit"].is_number());
        assert!(first["breakeven_revenue"].is_number());
        assert!(value["summary"]["average_roi"].is_number());
        assert_eq!(value["parameters"]["packaging_rate"], 0.0);
    }
}
