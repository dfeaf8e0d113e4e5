//! Form payload builders for the export endpoint.

/// Response body encoding requested from the API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

/// Whether coded values or their labels are exported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RawOrLabel {
    #[default]
    Raw,
    Label,
}

impl RawOrLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Raw => "raw",
            Self::Label => "label",
        }
    }
}

/// Flat record export (`content=record`).
///
/// Defaults mirror a plain flat export: raw values and headers, checkbox
/// labels and survey fields included, data access groups excluded.
#[derive(Debug, Clone)]
pub struct RecordExportRequest {
    pub format: ExportFormat,
    pub raw_or_label: RawOrLabel,
    pub raw_or_label_headers: RawOrLabel,
    pub export_checkbox_label: bool,
    pub export_survey_fields: bool,
    pub export_data_access_groups: bool,
}

impl Default for RecordExportRequest {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            raw_or_label: RawOrLabel::Raw,
            raw_or_label_headers: RawOrLabel::Raw,
            export_checkbox_label: true,
            export_survey_fields: true,
            export_data_access_groups: false,
        }
    }
}

impl RecordExportRequest {
    /// Form fields for this request, without the token.
    pub(crate) fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("content", "record".to_string()),
            ("action", "export".to_string()),
            ("format", self.format.as_str().to_string()),
            ("type", "flat".to_string()),
            ("csvDelimiter", String::new()),
            ("rawOrLabel", self.raw_or_label.as_str().to_string()),
            (
                "rawOrLabelHeaders",
                self.raw_or_label_headers.as_str().to_string(),
            ),
            (
                "exportCheckboxLabel",
                self.export_checkbox_label.to_string(),
            ),
            ("exportSurveyFields", self.export_survey_fields.to_string()),
            (
                "exportDataAccessGroups",
                self.export_data_access_groups.to_string(),
            ),
            ("returnFormat", "json".to_string()),
        ]
    }
}

/// Field metadata export (`content=metadata`).
#[derive(Debug, Clone, Default)]
pub struct MetadataExportRequest {
    pub format: ExportFormat,
}

impl MetadataExportRequest {
    pub(crate) fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("content", "metadata".to_string()),
            ("format", self.format.as_str().to_string()),
            ("returnFormat", "json".to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::{ExportFormat, MetadataExportRequest, RawOrLabel, RecordExportRequest};

    fn field<'a>(fields: &'a [(&'static str, String)], name: &str) -> &'a str {
        fields
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
            .unwrap_or_else(|| panic!("missing field {name}"))
    }

    #[test]
    fn record_request_defaults() {
        let fields = RecordExportRequest::default().form_fields();
        assert_eq!(field(&fields, "content"), "record");
        assert_eq!(field(&fields, "action"), "export");
        assert_eq!(field(&fields, "format"), "csv");
        assert_eq!(field(&fields, "type"), "flat");
        assert_eq!(field(&fields, "rawOrLabel"), "raw");
        assert_eq!(field(&fields, "exportCheckboxLabel"), "true");
        assert_eq!(field(&fields, "exportSurveyFields"), "true");
        assert_eq!(field(&fields, "exportDataAccessGroups"), "false");
        assert_eq!(field(&fields, "returnFormat"), "json");
    }

    #[test]
    fn record_request_label_export() {
        let request = RecordExportRequest {
            raw_or_label: RawOrLabel::Label,
            format: ExportFormat::Json,
            ..RecordExportRequest::default()
        };
        let fields = request.form_fields();
        assert_eq!(field(&fields, "rawOrLabel"), "label");
        assert_eq!(field(&fields, "format"), "json");
    }

    #[test]
    fn metadata_request_fields() {
        let fields = MetadataExportRequest::default().form_fields();
        assert_eq!(field(&fields, "content"), "metadata");
        assert_eq!(field(&fields, "format"), "csv");
        assert_eq!(field(&fields, "returnFormat"), "json");
        assert!(!fields.iter().any(|(key, _)| *key == "action"));
    }
}
