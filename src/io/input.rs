//! Session table readers.
//!
//! Readers only fail on structural problems (unreadable file, broken CSV
//! quoting, invalid JSON/TOML syntax). Cell contents are passed through as
//! [`Cell`]s and coerced later, so a typo in one cell never rejects a table.

use crate::core::{Cell, RawSessionRow, SessionField};
use crate::errors::{ProfitmapError, Result};
use clap::ValueEnum;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    Csv,
    Json,
    Toml,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            _ => Err(ProfitmapError::UnsupportedInput {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Read a session table, inferring the format from the extension unless given.
pub fn read_session_table(path: &Path, format: Option<InputFormat>) -> Result<Vec<RawSessionRow>> {
    let format = match format {
        Some(format) => format,
        None => InputFormat::from_path(path)?,
    };
    let contents = std::fs::read_to_string(path).map_err(|e| ProfitmapError::io(path, e))?;

    let rows = match format {
        InputFormat::Csv => parse_csv(contents.as_bytes())?,
        InputFormat::Json => parse_json(&contents)?,
        InputFormat::Toml => parse_toml(&contents)?,
    };
    log::info!(
        "Read {} session row(s) from {} ({:?})",
        rows.len(),
        path.display(),
        format
    );
    Ok(rows)
}

/// Parse a CSV table with a header row.
///
/// Headers are matched to session fields by name; unknown columns (such as
/// derived columns of an earlier export) are ignored.
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<RawSessionRow>> {
    let mut csv = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns: Vec<Option<SessionField>> = csv
        .headers()?
        .iter()
        .map(|h| SessionField::from_header(h.trim_start_matches('\u{feff}')))
        .collect();

    if !columns.iter().any(Option::is_some) {
        log::warn!("CSV header has no recognized session columns; every row will be zero");
    }

    let mut rows = Vec::new();
    for record in csv.records() {
        let record = record?;
        let row = columns
            .iter()
            .zip(record.iter())
            .filter_map(|(field, value)| field.map(|f| (f, value)))
            .fold(RawSessionRow::default(), |mut row, (field, value)| {
                row.set(field, Cell::Text(value.to_string()));
                row
            });
        rows.push(row);
    }
    Ok(rows)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonTable {
    Rows(Vec<RawSessionRow>),
    Wrapped { sessions: Vec<RawSessionRow> },
}

/// Parse a JSON array of rows, or an object with a `sessions` array
/// (which includes the JSON report format). An empty file is an empty table.
pub fn parse_json(contents: &str) -> Result<Vec<RawSessionRow>> {
    if contents.trim().is_empty() {
        return Ok(Vec::new());
    }
    let table: JsonTable = serde_json::from_str(contents)?;
    Ok(match table {
        JsonTable::Rows(rows) | JsonTable::Wrapped { sessions: rows } => rows,
    })
}

#[derive(Deserialize)]
struct TomlTable {
    #[serde(default)]
    sessions: Vec<RawSessionRow>,
}

/// Parse a TOML document with a `[[sessions]]` array of tables.
pub fn parse_toml(contents: &str) -> Result<Vec<RawSessionRow>> {
    let table: TomlTable = toml::from_str(contents)?;
    Ok(table.sessions)
}
