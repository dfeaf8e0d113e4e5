//! CSV exports for field analyses.

use std::path::Path;

use redcap_check::{ChoiceSummary, FieldTypeSummary};
use tracing::info;

use crate::error::{ReportError, Result};

/// Write a one-column CSV of field names (e.g. all checkbox fields).
pub fn write_field_list_csv(names: &[String], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| ReportError::csv(path, &e))?;
    writer
        .write_record(["field_name"])
        .map_err(|e| ReportError::csv(path, &e))?;
    for name in names {
        writer
            .write_record([name.as_str()])
            .map_err(|e| ReportError::csv(path, &e))?;
    }
    writer
        .flush()
        .map_err(|source| ReportError::io(path, source))?;
    info!(path = %path.display(), fields = names.len(), "wrote field list");
    Ok(())
}

/// Write choice-bearing fields with their option counts.
pub fn write_choice_summaries_csv(summaries: &[ChoiceSummary], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| ReportError::csv(path, &e))?;
    for summary in summaries {
        writer
            .serialize(summary)
            .map_err(|e| ReportError::csv(path, &e))?;
    }
    if summaries.is_empty() {
        writer
            .write_record([
                "field_name",
                "form_name",
                "field_type",
                "field_label",
                "select_choices_or_calculations",
                "num_options",
            ])
            .map_err(|e| ReportError::csv(path, &e))?;
    }
    writer
        .flush()
        .map_err(|source| ReportError::io(path, source))?;
    Ok(())
}

/// Write the field-type distribution.
pub fn write_field_type_counts_csv(counts: &[FieldTypeSummary], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| ReportError::csv(path, &e))?;
    writer
        .write_record(["field_type", "count"])
        .map_err(|e| ReportError::csv(path, &e))?;
    for summary in counts {
        writer
            .write_record([summary.field_type.as_str(), &summary.count.to_string()])
            .map_err(|e| ReportError::csv(path, &e))?;
    }
    writer
        .flush()
        .map_err(|source| ReportError::io(path, source))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use redcap_check::{FieldTypeSummary, choice_summaries};
    use redcap_model::{FieldType, MetadataRecord, MetadataTable};

    use super::{write_choice_summaries_csv, write_field_list_csv, write_field_type_counts_csv};

    #[test]
    fn field_list_has_header_and_rows() {
        let names = vec!["race".to_string(), "gender".to_string()];
        let file = tempfile::NamedTempFile::new().expect("temp file");
        write_field_list_csv(&names, file.path()).expect("write list");
        let written = std::fs::read_to_string(file.path()).expect("read back");
        assert_eq!(written, "field_name\nrace\ngender\n");
    }

    #[test]
    fn choice_summary_rows_serialize_with_header() {
        let table = MetadataTable::new(vec![
            MetadataRecord::new(
                "sex_bio",
                "demographics",
                FieldType::Radio,
                "Biological sex",
                "1, Male | 2, Female",
            )
            .expect("record"),
        ]);
        let summaries = choice_summaries(&table);
        let file = tempfile::NamedTempFile::new().expect("temp file");
        write_choice_summaries_csv(&summaries, file.path()).expect("write summaries");
        let written = std::fs::read_to_string(file.path()).expect("read back");
        let lines: Vec<&str> = written.lines().collect();
        assert!(lines[0].starts_with("field_name,form_name,field_type"));
        assert!(lines[1].starts_with("sex_bio,demographics,radio"));
        assert!(lines[1].ends_with(",2"));
    }

    #[test]
    fn type_counts_csv_shape() {
        let counts = vec![
            FieldTypeSummary {
                field_type: "text".to_string(),
                count: 4,
            },
            FieldTypeSummary {
                field_type: "radio".to_string(),
                count: 1,
            },
        ];
        let file = tempfile::NamedTempFile::new().expect("temp file");
        write_field_type_counts_csv(&counts, file.path()).expect("write counts");
        let written = std::fs::read_to_string(file.path()).expect("read back");
        assert_eq!(written, "field_type,count\ntext,4\nradio,1\n");
    }
}
