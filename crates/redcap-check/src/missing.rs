//! Missing-variable classification.
//!
//! Expected variables absent from the metadata fall into four buckets based
//! on REDCap naming conventions: per-form `_complete` status fields, exploded
//! checkbox options (`___`), survey timestamps, and everything else. The
//! conventions are not mutually exclusive as substrings (a name can contain
//! both `___` and `timestamp`), so classification applies an ordered rule
//! list and the first match wins. That keeps the four buckets a true
//! partition of the missing set.

use std::collections::BTreeSet;

use redcap_model::MetadataTable;
use serde::Serialize;

/// Bucket an absent variable falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MissingCategory {
    /// Name ends with the per-form status suffix `_complete`.
    Complete,
    /// Name contains the checkbox option separator `___`.
    Checkbox,
    /// Name contains `timestamp` (case-insensitive).
    Timestamp,
    /// None of the conventions apply.
    Other,
}

impl MissingCategory {
    /// All categories in report column order.
    pub const ALL: [Self; 4] = [Self::Complete, Self::Checkbox, Self::Timestamp, Self::Other];

    /// Report column name for this category.
    pub fn label(self) -> &'static str {
        match self {
            Self::Complete => "complete_variables",
            Self::Checkbox => "checkbox_variables",
            Self::Timestamp => "timestamp_variables",
            Self::Other => "other_missing",
        }
    }
}

/// Classification rules in precedence order. First match wins; the trailing
/// `Other` rule always matches, so every missing name lands in exactly one
/// bucket.
const MISSING_RULES: [(fn(&str) -> bool, MissingCategory); 4] = [
    (is_complete_field, MissingCategory::Complete),
    (is_checkbox_field, MissingCategory::Checkbox),
    (is_timestamp_field, MissingCategory::Timestamp),
    (|_| true, MissingCategory::Other),
];

fn is_complete_field(name: &str) -> bool {
    name.ends_with("_complete")
}

fn is_checkbox_field(name: &str) -> bool {
    name.contains("___")
}

fn is_timestamp_field(name: &str) -> bool {
    name.to_lowercase().contains("timestamp")
}

fn categorize(name: &str) -> MissingCategory {
    for (predicate, category) in MISSING_RULES {
        if predicate(name) {
            return category;
        }
    }
    MissingCategory::Other
}

/// Partition of the missing-variable set. The four sets are pairwise
/// disjoint and their union is exactly `expected − present`. Computed fresh
/// per call and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MissingVariableReport {
    pub complete_variables: BTreeSet<String>,
    pub checkbox_variables: BTreeSet<String>,
    pub timestamp_variables: BTreeSet<String>,
    pub other_missing: BTreeSet<String>,
}

impl MissingVariableReport {
    /// Names in the given category.
    pub fn category(&self, category: MissingCategory) -> &BTreeSet<String> {
        match category {
            MissingCategory::Complete => &self.complete_variables,
            MissingCategory::Checkbox => &self.checkbox_variables,
            MissingCategory::Timestamp => &self.timestamp_variables,
            MissingCategory::Other => &self.other_missing,
        }
    }

    fn category_mut(&mut self, category: MissingCategory) -> &mut BTreeSet<String> {
        match category {
            MissingCategory::Complete => &mut self.complete_variables,
            MissingCategory::Checkbox => &mut self.checkbox_variables,
            MissingCategory::Timestamp => &mut self.timestamp_variables,
            MissingCategory::Other => &mut self.other_missing,
        }
    }

    /// Count per category, in report column order. Zero counts are included
    /// so an all-present expected set still reports every category.
    pub fn category_counts(&self) -> Vec<(MissingCategory, usize)> {
        MissingCategory::ALL
            .into_iter()
            .map(|category| (category, self.category(category).len()))
            .collect()
    }

    pub fn total_missing(&self) -> usize {
        MissingCategory::ALL
            .into_iter()
            .map(|category| self.category(category).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_missing() == 0
    }
}

/// Classify which expected variables are absent from the metadata.
///
/// Pure function: `present` is the set of `field_name` values in the table
/// (duplicate rows collapse), the missing set is `expected − present`, and
/// each missing name goes to the first rule of [`MISSING_RULES`] that
/// matches it. Empty inputs are not errors; they simply yield empty sets.
pub fn classify_missing(
    expected: &BTreeSet<String>,
    metadata: &MetadataTable,
) -> MissingVariableReport {
    let present = metadata.field_names();
    let mut report = MissingVariableReport::default();
    for name in expected {
        if present.contains(name.as_str()) {
            continue;
        }
        report
            .category_mut(categorize(name))
            .insert(name.clone());
    }
    report
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use redcap_model::{FieldType, MetadataRecord, MetadataTable};

    use super::{MissingCategory, classify_missing};

    fn table(names: &[&str]) -> MetadataTable {
        let records = names
            .iter()
            .map(|name| {
                MetadataRecord::new(*name, "form", FieldType::Text, "", "").expect("record")
            })
            .collect();
        MetadataTable::new(records)
    }

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn partitions_missing_names() {
        let metadata = table(&["sex_bio", "gender", "height"]);
        let expected = set(&[
            "sex_bio",
            "gender",
            "monthly_income",
            "marital_status",
            "height",
            "weight",
            "timestamp_col",
        ]);
        let report = classify_missing(&expected, &metadata);
        assert_eq!(
            report.other_missing,
            set(&["monthly_income", "marital_status", "weight"])
        );
        assert_eq!(report.timestamp_variables, set(&["timestamp_col"]));
        assert!(report.checkbox_variables.is_empty());
        assert!(report.complete_variables.is_empty());
    }

    #[test]
    fn complete_suffix_wins() {
        let report = classify_missing(&set(&["demographics_complete"]), &table(&[]));
        assert_eq!(report.complete_variables, set(&["demographics_complete"]));
        assert_eq!(report.total_missing(), 1);
    }

    #[test]
    fn checkbox_options_are_grouped() {
        let report = classify_missing(&set(&["race___1", "race___2"]), &table(&[]));
        assert_eq!(report.checkbox_variables, set(&["race___1", "race___2"]));
    }

    #[test]
    fn precedence_checkbox_before_timestamp() {
        let report = classify_missing(&set(&["foo___timestamp"]), &table(&[]));
        assert_eq!(report.checkbox_variables, set(&["foo___timestamp"]));
        assert!(report.timestamp_variables.is_empty());
    }

    #[test]
    fn precedence_complete_before_checkbox() {
        let report = classify_missing(&set(&["survey___x_complete"]), &table(&[]));
        assert_eq!(report.complete_variables, set(&["survey___x_complete"]));
        assert!(report.checkbox_variables.is_empty());
    }

    #[test]
    fn timestamp_match_is_case_insensitive() {
        let report = classify_missing(&set(&["survey_TimeStamp"]), &table(&[]));
        assert_eq!(report.timestamp_variables, set(&["survey_TimeStamp"]));
    }

    #[test]
    fn empty_expected_yields_empty_report() {
        let report = classify_missing(&BTreeSet::new(), &table(&["a", "b"]));
        assert!(report.is_empty());
        for (_, count) in report.category_counts() {
            assert_eq!(count, 0);
        }
    }

    #[test]
    fn fully_present_expected_yields_empty_report() {
        let metadata = table(&["a_complete", "b___1", "c_timestamp", "d"]);
        let expected = set(&["a_complete", "b___1", "c_timestamp", "d"]);
        let report = classify_missing(&expected, &metadata);
        assert!(report.is_empty());
    }

    #[test]
    fn empty_metadata_is_not_an_error() {
        let report = classify_missing(&set(&["weight"]), &table(&[]));
        assert_eq!(report.other_missing, set(&["weight"]));
    }

    #[test]
    fn category_counts_keep_column_order() {
        let report = classify_missing(&set(&["x_complete", "y___1", "z"]), &table(&[]));
        let counts = report.category_counts();
        assert_eq!(counts[0], (MissingCategory::Complete, 1));
        assert_eq!(counts[1], (MissingCategory::Checkbox, 1));
        assert_eq!(counts[2], (MissingCategory::Timestamp, 0));
        assert_eq!(counts[3], (MissingCategory::Other, 1));
    }
}
