use crate::config::{self, OutputConfig, ProfitmapConfig};
use crate::core::{calculate_raw, CalculationReport, GlobalParameters, RawSessionRow};
use crate::errors::ProfitmapError;
use crate::formatting::FormattingConfig;
use crate::io::{self, InputFormat, OutputFormat, SortKey};
use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct CalcConfig {
    pub input: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub input_format: Option<InputFormat>,
    pub tax_percent: Option<f64>,
    pub packaging_percent: Option<f64>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub sort_by: Option<SortKey>,
    /// `None` falls back to `[output] descending`
    pub descending: Option<bool>,
    pub formatting_config: FormattingConfig,
}

pub fn handle_calc(config: CalcConfig) -> Result<()> {
    let file_config = load_file_config(config.config.as_deref())?;
    let report = build_report(&config, &file_config)?;

    let output = file_config.output();
    let format = config
        .format
        .or(output.default_format)
        .unwrap_or(OutputFormat::Terminal);
    let (sort_by, descending) = resolve_order(&config, &output);
    let report = io::sort_sessions(report, sort_by, descending);

    // styling escapes have no business in a file
    let formatting = if config.output.is_some() {
        FormattingConfig::plain()
    } else {
        config.formatting_config
    };
    let rendered = render_report(&report, format, formatting)?;
    emit(&rendered, config.output.as_deref())
}

fn load_file_config(explicit: Option<&Path>) -> Result<ProfitmapConfig> {
    match explicit {
        Some(path) => Ok(config::load_config_from(path)?),
        None => Ok(config::load_config()),
    }
}

/// Resolve rates and rows, then run the calculator.
pub fn build_report(
    config: &CalcConfig,
    file_config: &ProfitmapConfig,
) -> Result<CalculationReport> {
    let params = resolve_parameters(config, file_config)?;
    let rows = resolve_rows(config, file_config)?;

    log::debug!(
        "Calculating {} session(s) at tax {} / packaging {}",
        rows.len(),
        params.tax_rate,
        params.packaging_rate
    );
    Ok(calculate_raw(&rows, &params))
}

pub fn resolve_parameters(
    config: &CalcConfig,
    file_config: &ProfitmapConfig,
) -> Result<GlobalParameters> {
    let from_flags = config.tax_percent.is_some() || config.packaging_percent.is_some();
    let source = match (from_flags, file_config.rates.is_some()) {
        (true, _) => "command line",
        (false, true) => "config [rates]",
        (false, false) => "defaults",
    };
    let rates = file_config
        .rates()
        .with_overrides(config.tax_percent, config.packaging_percent);
    log::debug!(
        "Rates from {source}: tax {}%, packaging {}%",
        rates.tax_percent,
        rates.packaging_percent
    );
    Ok(config::validate_rates_result(&rates)?)
}

/// Flags win over `[output]`, each setting on its own.
pub fn resolve_order(config: &CalcConfig, output: &OutputConfig) -> (SortKey, bool) {
    let sort_by = config.sort_by.or(output.sort_by).unwrap_or_default();
    let descending = config.descending.unwrap_or(output.descending);
    (sort_by, descending)
}

fn resolve_rows(config: &CalcConfig, file_config: &ProfitmapConfig) -> Result<Vec<RawSessionRow>> {
    match &config.input {
        Some(path) => io::read_session_table(path, config.input_format)
            .with_context(|| format!("Failed to read session table {}", path.display())),
        None if file_config.sessions.is_empty() => Err(ProfitmapError::NoSessions.into()),
        None => {
            log::info!(
                "Using {} session(s) from configuration",
                file_config.sessions.len()
            );
            Ok(file_config.sessions.clone())
        }
    }
}

pub fn render_report(
    report: &CalculationReport,
    format: OutputFormat,
    formatting: FormattingConfig,
) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    io::create_writer(format, &mut buf, formatting).write_report(report)?;
    Ok(buf)
}

fn emit(rendered: &[u8], output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let mut file = io::create_output_file(path)?;
            file.write_all(rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Wrote report to {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(rendered)?;
            handle.flush()?;
        }
    }
    Ok(())
}
