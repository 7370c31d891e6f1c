// Test utility module for profitmap integration tests
#![allow(dead_code)]

use std::path::PathBuf;

/// The two sessions written by `profitmap init`, as a CSV table.
pub const SAMPLE_CSV: &str = "\
name,estimated_revenue,gross_margin_rate,venue_rent,onsite_staffing,utilities_logistics,advertising_cost,venue_commission_rate
Taipei A,600000,0.35,120000,45000,5000,20000,0.05
Taichung B,400000,0.40,60000,30000,3000,10000,0.00
";

// Helper to create temporary test files
pub fn create_test_file(content: &str, file_name: &str) -> (tempfile::TempDir, PathBuf) {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join(file_name);
    std::fs::write(&file_path, content).expect("Failed to write test file");
    (temp_dir, file_path)
}

pub fn assert_close(actual: f64, expected: f64) {
    let tolerance = 1e-6 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}
