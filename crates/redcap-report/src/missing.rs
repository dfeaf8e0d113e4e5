//! Missing-variable report artifacts.

use std::path::Path;

use chrono::Utc;
use redcap_check::{MissingCategory, MissingVariableReport};
use serde::Serialize;
use tracing::info;

use crate::error::{ReportError, Result};

/// Write the report as a CSV with one column per category.
///
/// Columns keep the fixed category order; shorter columns are padded with
/// empty cells so every row has four values.
pub fn write_missing_report_csv(report: &MissingVariableReport, path: &Path) -> Result<()> {
    let columns: Vec<Vec<&String>> = MissingCategory::ALL
        .into_iter()
        .map(|category| report.category(category).iter().collect())
        .collect();
    let height = columns.iter().map(Vec::len).max().unwrap_or(0);

    let mut writer = csv::Writer::from_path(path).map_err(|e| ReportError::csv(path, &e))?;
    writer
        .write_record(MissingCategory::ALL.map(MissingCategory::label))
        .map_err(|e| ReportError::csv(path, &e))?;
    for row_idx in 0..height {
        let row: Vec<&str> = columns
            .iter()
            .map(|column| column.get(row_idx).map(|name| name.as_str()).unwrap_or(""))
            .collect();
        writer
            .write_record(&row)
            .map_err(|e| ReportError::csv(path, &e))?;
    }
    writer
        .flush()
        .map_err(|source| ReportError::io(path, source))?;
    info!(path = %path.display(), missing = report.total_missing(), "wrote missing-variable report");
    Ok(())
}

/// Machine-readable summary of one classification run.
#[derive(Debug, Serialize)]
pub struct MissingSummary {
    pub generated_at: String,
    pub expected: usize,
    pub total_missing: usize,
    pub complete_variables: usize,
    pub checkbox_variables: usize,
    pub timestamp_variables: usize,
    pub other_missing: usize,
}

impl MissingSummary {
    pub fn new(report: &MissingVariableReport, expected: usize) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            expected,
            total_missing: report.total_missing(),
            complete_variables: report.complete_variables.len(),
            checkbox_variables: report.checkbox_variables.len(),
            timestamp_variables: report.timestamp_variables.len(),
            other_missing: report.other_missing.len(),
        }
    }
}

/// Write per-category counts as JSON. Zero counts are kept so an all-present
/// expected set still produces a visible report.
pub fn write_missing_summary_json(summary: &MissingSummary, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(summary)?;
    std::fs::write(path, json).map_err(|source| ReportError::io(path, source))?;
    Ok(())
}
