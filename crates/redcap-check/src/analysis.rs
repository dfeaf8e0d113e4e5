//! Field analyses over the metadata table.

use std::collections::BTreeMap;

use redcap_model::{FieldType, MetadataRecord, MetadataTable};
use serde::Serialize;

/// Count of fields sharing one raw field type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldTypeSummary {
    pub field_type: String,
    pub count: usize,
}

/// Occurrences per field type, descending by count, ties broken by name.
pub fn field_type_counts(metadata: &MetadataTable) -> Vec<FieldTypeSummary> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in metadata.records() {
        *counts.entry(record.field_type.as_str()).or_default() += 1;
    }
    let mut summaries: Vec<FieldTypeSummary> = counts
        .into_iter()
        .map(|(field_type, count)| FieldTypeSummary {
            field_type: field_type.to_string(),
            count,
        })
        .collect();
    summaries.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.field_type.cmp(&b.field_type))
    });
    summaries
}

/// Field name and type for each requested variable present in the metadata.
/// Requested names absent from the table are simply not returned; absence
/// checks belong to [`crate::classify_missing`].
pub fn variable_types<'a>(
    metadata: &'a MetadataTable,
    names: &[&str],
) -> Vec<(&'a str, &'a FieldType)> {
    metadata
        .records()
        .iter()
        .filter(|record| names.contains(&record.field_name.as_str()))
        .map(|record| (record.field_name.as_str(), &record.field_type))
        .collect()
}

/// One choice-bearing field with its option count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceSummary {
    pub field_name: String,
    pub form_name: String,
    pub field_type: String,
    pub field_label: String,
    pub select_choices_or_calculations: String,
    pub num_options: usize,
}

impl ChoiceSummary {
    fn from_record(record: &MetadataRecord) -> Self {
        Self {
            field_name: record.field_name.clone(),
            form_name: record.form_name.clone(),
            field_type: record.field_type.as_str().to_string(),
            field_label: record.field_label.clone(),
            select_choices_or_calculations: record.select_choices_or_calculations.clone(),
            num_options: count_options(&record.select_choices_or_calculations),
        }
    }
}

/// Raw `|`-separated segment count of the option text. Empty segments still
/// count, so a stray double pipe is visible in the report instead of being
/// silently collapsed; only fully empty text yields zero.
fn count_options(raw: &str) -> usize {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        0
    } else {
        trimmed.split('|').count()
    }
}

/// Option summaries for every checkbox, radio, and dropdown field, in table
/// order.
pub fn choice_summaries(metadata: &MetadataTable) -> Vec<ChoiceSummary> {
    metadata
        .records_with_choices()
        .map(ChoiceSummary::from_record)
        .collect()
}

/// Field names of one type, in table order, plus the comma-joined form used
/// for pasting into API field lists.
pub fn fields_of_type(metadata: &MetadataTable, field_type: &FieldType) -> (Vec<String>, String) {
    let names: Vec<String> = metadata
        .records_of_type(field_type)
        .map(|record| record.field_name.clone())
        .collect();
    let joined = names.join(", ");
    (names, joined)
}
