//! Flat record export handling.
//!
//! Record exports have project-specific columns, so they stay as a plain
//! header/row table instead of a typed model.

use std::path::Path;

use tracing::debug;

use crate::error::{IngestError, Result};
use crate::metadata::normalize_cell;

#[derive(Debug, Clone, Default)]
pub struct RecordTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RecordTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Remove the named columns in place. Names not present are ignored,
    /// matching the lenient exclusion of identifying columns in exports.
    pub fn drop_columns(&mut self, names: &[&str]) {
        let keep: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .filter(|(_, header)| !names.contains(&header.as_str()))
            .map(|(idx, _)| idx)
            .collect();
        if keep.len() == self.headers.len() {
            return;
        }
        self.headers = keep.iter().map(|&idx| self.headers[idx].clone()).collect();
        for row in &mut self.rows {
            *row = keep
                .iter()
                .map(|&idx| row.get(idx).cloned().unwrap_or_default())
                .collect();
        }
    }
}

/// Parse a flat record export body.
pub fn parse_records_csv(text: &str) -> Result<RecordTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());
    let headers: Vec<String> = reader
        .headers()
        .map_err(IngestError::csv)?
        .iter()
        .map(|h| normalize_cell(h).to_string())
        .collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(IngestError::csv)?;
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            let value = record.get(idx).unwrap_or("");
            row.push(normalize_cell(value).to_string());
        }
        rows.push(row);
    }
    debug!(columns = headers.len(), rows = rows.len(), "parsed record export");
    Ok(RecordTable { headers, rows })
}

/// Write the table back out with the given delimiter.
pub fn write_records_csv(table: &RecordTable, path: &Path, delimiter: u8) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_path(path)
        .map_err(IngestError::csv)?;
    writer
        .write_record(&table.headers)
        .map_err(IngestError::csv)?;
    for row in &table.rows {
        writer.write_record(row).map_err(IngestError::csv)?;
    }
    writer
        .flush()
        .map_err(|source| IngestError::io(path, source))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::parse_records_csv;

    const SAMPLE: &str = "\
record_id,name,height,weight
1,Alice,170,60
2,Bob,180,80
";

    #[test]
    fn parses_headers_and_rows() {
        let table = parse_records_csv(SAMPLE).expect("parse records");
        assert_eq!(table.headers, vec!["record_id", "name", "height", "weight"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0][1], "Alice");
    }

    #[test]
    fn drop_columns_removes_named() {
        let mut table = parse_records_csv(SAMPLE).expect("parse records");
        table.drop_columns(&["name"]);
        assert_eq!(table.headers, vec!["record_id", "height", "weight"]);
        assert_eq!(table.rows[0], vec!["1", "170", "60"]);
    }

    #[test]
    fn drop_columns_ignores_absent_names() {
        let mut table = parse_records_csv(SAMPLE).expect("parse records");
        table.drop_columns(&["does_not_exist"]);
        assert_eq!(table.headers.len(), 4);
        assert_eq!(table.rows[1], vec!["2", "Bob", "180", "80"]);
    }

    #[test]
    fn unwritable_path_maps_to_csv_error() {
        let table = parse_records_csv(SAMPLE).expect("parse records");
        let dir = tempfile::tempdir().expect("temp dir");
        // A directory is not a writable CSV target.
        let error = super::write_records_csv(&table, dir.path(), b';').unwrap_err();
        assert!(matches!(error, crate::IngestError::Csv { .. }));
    }

    #[test]
    fn round_trips_with_semicolon_delimiter() {
        let table = parse_records_csv(SAMPLE).expect("parse records");
        let file = tempfile::NamedTempFile::new().expect("temp file");
        super::write_records_csv(&table, file.path(), b';').expect("write records");
        let written = std::fs::read_to_string(file.path()).expect("read back");
        assert!(written.starts_with("record_id;name;height;weight"));
        assert!(written.contains("1;Alice;170;60"));
    }
}
