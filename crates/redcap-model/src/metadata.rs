//! Metadata records and the table loaded from a REDCap export.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::choices::{ChoiceOption, parse_choices};
use crate::error::{ModelError, Result};
use crate::field_type::FieldType;

/// One row of the metadata export: a single study field.
#[derive(Debug, Clone, Serialize)]
pub struct MetadataRecord {
    /// Unique field identifier.
    pub field_name: String,
    /// Data-entry form the field belongs to.
    pub form_name: String,
    /// Widget category.
    pub field_type: FieldType,
    /// Human-readable label.
    pub field_label: String,
    /// Raw pipe-delimited option encoding (empty for fields without options).
    pub select_choices_or_calculations: String,
}

impl MetadataRecord {
    /// Build a record, rejecting an empty `field_name`.
    pub fn new(
        field_name: impl Into<String>,
        form_name: impl Into<String>,
        field_type: FieldType,
        field_label: impl Into<String>,
        select_choices_or_calculations: impl Into<String>,
    ) -> Result<Self> {
        let field_name = field_name.into();
        if field_name.trim().is_empty() {
            return Err(ModelError::EmptyFieldName);
        }
        Ok(Self {
            field_name,
            form_name: form_name.into(),
            field_type,
            field_label: field_label.into(),
            select_choices_or_calculations: select_choices_or_calculations.into(),
        })
    }

    /// Parsed option list; empty for fields without choices.
    pub fn choices(&self) -> Vec<ChoiceOption> {
        parse_choices(&self.select_choices_or_calculations)
    }
}

/// Ordered sequence of metadata records, read-only after load.
#[derive(Debug, Clone, Default)]
pub struct MetadataTable {
    records: Vec<MetadataRecord>,
}

impl MetadataTable {
    pub fn new(records: Vec<MetadataRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[MetadataRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All field names in the table. Duplicate rows collapse.
    pub fn field_names(&self) -> BTreeSet<&str> {
        self.records
            .iter()
            .map(|record| record.field_name.as_str())
            .collect()
    }

    /// First record with the given field name, if present.
    pub fn get(&self, field_name: &str) -> Option<&MetadataRecord> {
        self.records
            .iter()
            .find(|record| record.field_name == field_name)
    }

    /// Records whose type matches exactly.
    pub fn records_of_type<'a>(
        &'a self,
        field_type: &'a FieldType,
    ) -> impl Iterator<Item = &'a MetadataRecord> {
        self.records
            .iter()
            .filter(move |record| &record.field_type == field_type)
    }

    /// Records that carry an option list (checkbox, radio, dropdown).
    pub fn records_with_choices(&self) -> impl Iterator<Item = &MetadataRecord> {
        self.records
            .iter()
            .filter(|record| record.field_type.has_choices())
    }
}

#[cfg(test)]
mod tests {
    use super::{MetadataRecord, MetadataTable};
    use crate::error::ModelError;
    use crate::field_type::FieldType;

    fn record(name: &str, field_type: FieldType) -> MetadataRecord {
        MetadataRecord::new(name, "demographics", field_type, name.to_uppercase(), "")
            .expect("valid record")
    }

    #[test]
    fn empty_field_name_is_rejected() {
        let error = MetadataRecord::new("  ", "form", FieldType::Text, "", "").unwrap_err();
        assert!(matches!(error, ModelError::EmptyFieldName));
    }

    #[test]
    fn field_names_collapse_duplicates() {
        let table = MetadataTable::new(vec![
            record("sex_bio", FieldType::Radio),
            record("sex_bio", FieldType::Radio),
            record("height", FieldType::Text),
        ]);
        let names = table.field_names();
        assert_eq!(names.len(), 2);
        assert!(names.contains("sex_bio"));
        assert!(names.contains("height"));
    }

    #[test]
    fn filters_by_type_and_choices() {
        let table = MetadataTable::new(vec![
            record("race", FieldType::Checkbox),
            record("gender", FieldType::Dropdown),
            record("height", FieldType::Text),
            record("intro", FieldType::Descriptive),
        ]);
        let checkboxes: Vec<_> = table
            .records_of_type(&FieldType::Checkbox)
            .map(|r| r.field_name.as_str())
            .collect();
        assert_eq!(checkboxes, vec!["race"]);
        let with_choices: Vec<_> = table
            .records_with_choices()
            .map(|r| r.field_name.as_str())
            .collect();
        assert_eq!(with_choices, vec!["race", "gender"]);
    }
}
