use serde::Serialize;

/// One option of a checkbox/radio/dropdown field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceOption {
    /// Coded value as exported (left of the first comma).
    pub code: String,
    /// Human-readable label.
    pub label: String,
}

/// Parse REDCap's pipe-delimited option encoding.
///
/// The export format is `code, label | code, label | ...`. Labels may contain
/// commas, so only the first comma of each segment splits code from label.
/// Segments without a comma are kept as label-only options with an empty
/// code. Empty input yields an empty vec.
pub fn parse_choices(raw: &str) -> Vec<ChoiceOption> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed
        .split('|')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| match segment.split_once(',') {
            Some((code, label)) => ChoiceOption {
                code: code.trim().to_string(),
                label: label.trim().to_string(),
            },
            None => ChoiceOption {
                code: String::new(),
                label: segment.to_string(),
            },
        })
        .collect()
}
