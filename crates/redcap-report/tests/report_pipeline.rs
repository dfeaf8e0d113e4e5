//! End-to-end report generation from a metadata export, offline.

use std::collections::BTreeSet;

use redcap_check::{classify_missing, field_type_counts};
use redcap_ingest::parse_metadata_csv;
use redcap_report::{
    BarChart, MissingSummary, write_field_type_counts_csv, write_missing_report_csv,
    write_missing_summary_json,
};

const METADATA: &str = "\
field_name,form_name,section_header,field_type,field_label,select_choices_or_calculations
record_id,demographics,,text,Record ID,
sex_bio,demographics,,radio,Biological sex,\"1, Male | 2, Female\"
gender,demographics,,dropdown,Gender identity,\"1, Man | 2, Woman | 3, Non-binary\"
height,demographics,,text,Height (cm),
intro,demographics,,descriptive,Welcome,
";

fn expected() -> BTreeSet<String> {
    [
        "sex_bio",
        "gender",
        "monthly_income",
        "marital_status",
        "height",
        "weight",
        "timestamp_col",
        "demographics_complete",
        "race___1",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

#[test]
fn classifies_and_writes_all_artifacts() {
    let metadata = parse_metadata_csv(METADATA).expect("parse metadata");
    let report = classify_missing(&expected(), &metadata);

    assert_eq!(report.complete_variables.len(), 1);
    assert_eq!(report.checkbox_variables.len(), 1);
    assert_eq!(report.timestamp_variables.len(), 1);
    assert_eq!(report.other_missing.len(), 3);

    let dir = tempfile::tempdir().expect("temp dir");
    let csv_path = dir.path().join("missing_variables_report.csv");
    write_missing_report_csv(&report, &csv_path).expect("write report csv");
    let csv = std::fs::read_to_string(&csv_path).expect("read report csv");
    // Header plus the tallest category (other_missing has three names).
    assert_eq!(csv.lines().count(), 4);
    assert!(csv.contains("demographics_complete"));
    assert!(csv.contains("race___1"));
    assert!(csv.contains("timestamp_col"));
    assert!(csv.contains("monthly_income"));

    let json_path = dir.path().join("missing_variables_summary.json");
    let summary = MissingSummary::new(&report, expected().len());
    write_missing_summary_json(&summary, &json_path).expect("write summary");
    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json_path).expect("read summary"))
            .expect("valid json");
    assert_eq!(value["expected"], 9);
    assert_eq!(value["total_missing"], 6);

    let chart_path = dir.path().join("missing_variables_summary.png");
    BarChart::new("Summary of Missing Variables by Category", "Count")
        .with_bars(
            report
                .category_counts()
                .into_iter()
                .map(|(category, count)| (category.label(), count)),
        )
        .render_png(&chart_path)
        .expect("render chart");
    assert!(chart_path.exists());
}

#[test]
fn field_type_distribution_from_export() {
    let metadata = parse_metadata_csv(METADATA).expect("parse metadata");
    let counts = field_type_counts(&metadata);
    assert_eq!(counts[0].field_type, "text");
    assert_eq!(counts[0].count, 2);

    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("field_type_distribution.csv");
    write_field_type_counts_csv(&counts, &path).expect("write distribution");
    let csv = std::fs::read_to_string(&path).expect("read distribution");
    assert!(csv.starts_with("field_type,count\ntext,2\n"));
}
