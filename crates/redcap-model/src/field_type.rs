use serde::{Deserialize, Serialize};

/// Data-entry widget category of a REDCap field.
///
/// The vocabulary is closed for current REDCap versions; anything this crate
/// does not recognize is carried through verbatim as [`FieldType::Other`]
/// rather than rejected, so newer instances keep working.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FieldType {
    Text,
    Notes,
    Calc,
    Dropdown,
    Radio,
    Checkbox,
    YesNo,
    TrueFalse,
    File,
    Slider,
    Descriptive,
    Sql,
    Other(String),
}

impl FieldType {
    /// Parse the raw `field_type` value from a metadata export.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "text" => Self::Text,
            "notes" => Self::Notes,
            "calc" => Self::Calc,
            "dropdown" => Self::Dropdown,
            "radio" => Self::Radio,
            "checkbox" => Self::Checkbox,
            "yesno" => Self::YesNo,
            "truefalse" => Self::TrueFalse,
            "file" => Self::File,
            "slider" => Self::Slider,
            "descriptive" => Self::Descriptive,
            "sql" => Self::Sql,
            other => Self::Other(other.to_string()),
        }
    }

    /// The raw export spelling of this type.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Notes => "notes",
            Self::Calc => "calc",
            Self::Dropdown => "dropdown",
            Self::Radio => "radio",
            Self::Checkbox => "checkbox",
            Self::YesNo => "yesno",
            Self::TrueFalse => "truefalse",
            Self::File => "file",
            Self::Slider => "slider",
            Self::Descriptive => "descriptive",
            Self::Sql => "sql",
            Self::Other(raw) => raw,
        }
    }

    /// Whether fields of this type carry an option list in
    /// `select_choices_or_calculations`.
    pub fn has_choices(&self) -> bool {
        matches!(self, Self::Checkbox | Self::Radio | Self::Dropdown)
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
