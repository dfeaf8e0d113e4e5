use std::path::PathBuf;

use redcap_check::{ChoiceSummary, FieldTypeSummary, MissingVariableReport};

#[derive(Debug)]
pub struct RecordsResult {
    pub rows: usize,
    pub columns: usize,
    pub out: PathBuf,
}

#[derive(Debug)]
pub struct MetadataResult {
    pub fields: usize,
    pub out: PathBuf,
}

#[derive(Debug)]
pub struct MissingResult {
    pub expected: usize,
    pub report: MissingVariableReport,
    pub csv_path: PathBuf,
    pub json_path: PathBuf,
    pub chart_path: Option<PathBuf>,
    /// (field name, field type) for expected variables present in the
    /// metadata, when `--show-types` is set.
    pub present_types: Option<Vec<(String, String)>>,
}

#[derive(Debug)]
pub struct FieldTypesResult {
    pub total_fields: usize,
    pub counts: Vec<FieldTypeSummary>,
    pub csv_path: PathBuf,
    pub chart_path: Option<PathBuf>,
    /// (field type, field count, written path) per `--save-fields` request.
    pub field_lists: Vec<(String, usize, PathBuf)>,
}

#[derive(Debug)]
pub struct ChoicesResult {
    pub summaries: Vec<ChoiceSummary>,
    pub out: PathBuf,
}
