//! Integration tests for reading session tables from disk and writing reports.

mod common;

use common::{assert_close, create_test_file, SAMPLE_CSV};
use indoc::indoc;
use pretty_assertions::assert_eq;
use profitmap::commands::render_report;
use profitmap::core::GlobalParameters;
use profitmap::formatting::FormattingConfig;
use profitmap::io::{read_session_table, sort_sessions, InputFormat, OutputFormat, SortKey};
use profitmap::{calculate_raw, ProfitmapError};

#[test]
fn test_csv_table_calculates_sample_sessions() {
    let (_dir, path) = create_test_file(SAMPLE_CSV, "sessions.csv");
    let rows = read_session_table(&path, None).unwrap();
    let report = calculate_raw(&rows, &GlobalParameters::default());

    assert_eq!(report.sessions.len(), 2);
    assert_close(report.sessions[0].metrics.net_profit, -40000.0);
    assert_close(report.sessions[1].metrics.net_profit, 37000.0);
    assert_close(report.summary.total_revenue, 1_000_000.0);
    assert_close(report.summary.total_net_profit, -3000.0);
}

#[test]
fn test_json_and_toml_tables_agree_with_csv() {
    let json = indoc! {r#"
        {"sessions": [
            {"name": "Taipei A", "estimated_revenue": 600000, "gross_margin_rate": 0.35,
             "venue_rent": 120000, "onsite_staffing": 45000, "utilities_logistics": 5000,
             "advertising_cost": 20000, "venue_commission_rate": 0.05},
            {"name": "Taichung B", "estimated_revenue": "400000", "gross_margin_rate": "0.40",
             "venue_rent": 60000, "onsite_staffing": 30000, "utilities_logistics": 3000,
             "advertising_cost": 10000, "venue_commission_rate": 0}
        ]}
    "#};
    let toml = indoc! {r#"
        [[sessions]]
        name = "Taipei A"
        estimated_revenue = 600000
        gross_margin_rate = 0.35
        venue_rent = 120000
        onsite_staffing = 45000
        utilities_logistics = 5000
        advertising_cost = 20000
        venue_commission_rate = 0.05

        [[sessions]]
        name = "Taichung B"
        estimated_revenue = 400000
        gross_margin_rate = 0.40
        venue_rent = 60000
        onsite_staffing = 30000
        utilities_logistics = 3000
        advertising_cost = 10000
        venue_commission_rate = 0.0
    "#};

    let params = GlobalParameters::default();
    let (_d1, csv_path) = create_test_file(SAMPLE_CSV, "sessions.csv");
    let (_d2, json_path) = create_test_file(json, "sessions.json");
    let (_d3, toml_path) = create_test_file(toml, "sessions.toml");

    let from_csv = calculate_raw(&read_session_table(&csv_path, None).unwrap(), &params);
    let from_json = calculate_raw(&read_session_table(&json_path, None).unwrap(), &params);
    let from_toml = calculate_raw(&read_session_table(&toml_path, None).unwrap(), &params);

    assert_eq!(from_csv, from_json);
    assert_eq!(from_csv, from_toml);
}

#[test]
fn test_explicit_format_overrides_extension() {
    let (_dir, path) = create_test_file(SAMPLE_CSV, "sessions.txt");
    assert!(matches!(
        read_session_table(&path, None),
        Err(ProfitmapError::UnsupportedInput { .. })
    ));
    let rows = read_session_table(&path, Some(InputFormat::Csv)).unwrap();
    assert_eq!(rows.len(), 2);
}

#[test]
fn test_missing_file_reports_path() {
    let err = read_session_table(std::path::Path::new("/nonexistent/s.csv"), None).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/s.csv"));
}

#[test]
fn test_csv_export_can_be_read_back() {
    let (_dir, path) = create_test_file(SAMPLE_CSV, "sessions.csv");
    let params = GlobalParameters::default();
    let report = calculate_raw(&read_session_table(&path, None).unwrap(), &params);

    let exported = render_report(&report, OutputFormat::Csv, FormattingConfig::plain()).unwrap();
    let (_dir2, export_path) =
        create_test_file(&String::from_utf8(exported).unwrap(), "export.csv");

    // derived columns are ignored on the way back in
    let again = calculate_raw(&read_session_table(&export_path, None).unwrap(), &params);
    assert_eq!(again, report);
}

#[test]
fn test_json_report_shape() {
    let (_dir, path) = create_test_file(SAMPLE_CSV, "sessions.csv");
    let report = calculate_raw(
        &read_session_table(&path, None).unwrap(),
        &GlobalParameters::default(),
    );
    let bytes = render_report(&report, OutputFormat::Json, FormattingConfig::plain()).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(json["parameters"]["tax_rate"], 0.05);
    let first = &json["sessions"][0];
    assert_eq!(first["name"], "Taipei A");
    assert_close(first["net_profit"].as_f64().unwrap(), -40000.0);
    assert!(first.get("breakeven_revenue").is_some());
    assert!(first.get("roi_percent").is_some());
    assert_close(json["summary"]["total_net_profit"].as_f64().unwrap(), -3000.0);
}

#[test]
fn test_sorting_by_net_profit_descending() {
    let (_dir, path) = create_test_file(SAMPLE_CSV, "sessions.csv");
    let report = calculate_raw(
        &read_session_table(&path, None).unwrap(),
        &GlobalParameters::default(),
    );
    let summary = report.summary;
    let sorted = sort_sessions(report, SortKey::NetProfit, true);

    let names: Vec<_> = sorted.sessions.iter().map(|s| s.session.name.as_str()).collect();
    assert_eq!(names, vec!["Taichung B", "Taipei A"]);
    assert_eq!(sorted.summary, summary);
}
