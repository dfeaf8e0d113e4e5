//! Expected-variable list loading.

use std::collections::BTreeSet;
use std::path::Path;

use tracing::debug;

use crate::error::{IngestError, Result};
use crate::metadata::normalize_cell;

/// Read a one-column CSV of variable names into a set.
///
/// Only the first column is read, one name per row, trimmed; empty cells are
/// skipped and duplicates collapse. A first row that is just a column title
/// (`field_name` or `variable`, case-insensitive) is treated as a header and
/// skipped; anything else on the first row is kept as data.
pub fn read_expected_variables(path: &Path) -> Result<BTreeSet<String>> {
    let text = std::fs::read_to_string(path).map_err(|source| IngestError::io(path, source))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());
    let mut names = BTreeSet::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record.map_err(IngestError::csv)?;
        let Some(raw) = record.get(0) else {
            continue;
        };
        let name = normalize_cell(raw);
        if name.is_empty() {
            continue;
        }
        if idx == 0 && is_header_title(name) {
            continue;
        }
        names.insert(name.to_string());
    }
    debug!(path = %path.display(), names = names.len(), "loaded expected variables");
    Ok(names)
}

fn is_header_title(value: &str) -> bool {
    value.eq_ignore_ascii_case("field_name") || value.eq_ignore_ascii_case("variable")
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::read_expected_variables;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write");
        file
    }

    #[test]
    fn reads_first_column_as_set() {
        let file = write_temp("sex_bio\ngender\nsex_bio\n\nheight\n");
        let names = read_expected_variables(file.path()).expect("read");
        assert_eq!(names.len(), 3);
        assert!(names.contains("sex_bio"));
        assert!(names.contains("gender"));
        assert!(names.contains("height"));
    }

    #[test]
    fn skips_header_title_row() {
        let file = write_temp("field_name\nweight\n");
        let names = read_expected_variables(file.path()).expect("read");
        assert_eq!(names.len(), 1);
        assert!(names.contains("weight"));
    }

    #[test]
    fn keeps_first_row_when_it_is_data() {
        let file = write_temp("weight\nheight\n");
        let names = read_expected_variables(file.path()).expect("read");
        assert_eq!(names.len(), 2);
    }

    #[test]
    fn only_first_column_is_read() {
        let file = write_temp("weight,ignored\nheight,also ignored\n");
        let names = read_expected_variables(file.path()).expect("read");
        assert_eq!(names.len(), 2);
        assert!(!names.contains("ignored"));
    }
}
