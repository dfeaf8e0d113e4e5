//! Metadata CSV parsing.

use redcap_model::{FieldType, MetadataRecord, MetadataTable};
use tracing::debug;

use crate::error::{IngestError, Result};

/// Strip BOM and surrounding whitespace from a header or cell.
pub(crate) fn normalize_cell(raw: &str) -> &str {
    raw.trim().trim_matches('\u{feff}')
}

fn header_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| normalize_cell(h) == name)
}

fn get_string(row: &csv::StringRecord, idx: Option<usize>) -> String {
    idx.and_then(|i| row.get(i))
        .map(normalize_cell)
        .unwrap_or("")
        .to_string()
}

fn require_column(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    header_index(headers, name).ok_or_else(|| IngestError::MissingColumn {
        column: name.to_string(),
    })
}

/// Parse a metadata export body into a typed table.
///
/// `field_name` and `field_type` columns are required; the remaining columns
/// default to empty when absent. A row with an empty `field_name` is a parse
/// error rather than a silently skipped record.
pub fn parse_metadata_csv(text: &str) -> Result<MetadataTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());
    let headers = reader.headers().map_err(IngestError::csv)?.clone();

    let idx_name = require_column(&headers, "field_name")?;
    let idx_type = require_column(&headers, "field_type")?;
    let idx_form = header_index(&headers, "form_name");
    let idx_label = header_index(&headers, "field_label");
    let idx_choices = header_index(&headers, "select_choices_or_calculations");

    let mut records = Vec::new();
    for (row_number, row) in reader.records().enumerate() {
        let row = row.map_err(IngestError::csv)?;
        let field_name = get_string(&row, Some(idx_name));
        if field_name.is_empty() {
            return Err(IngestError::EmptyFieldName {
                row: row_number + 2,
            });
        }
        let field_type = FieldType::parse(&get_string(&row, Some(idx_type)));
        let record = MetadataRecord::new(
            field_name,
            get_string(&row, idx_form),
            field_type,
            get_string(&row, idx_label),
            get_string(&row, idx_choices),
        )
        .map_err(|_| IngestError::EmptyFieldName {
            row: row_number + 2,
        })?;
        records.push(record);
    }
    debug!(fields = records.len(), "parsed metadata export");
    Ok(MetadataTable::new(records))
}
