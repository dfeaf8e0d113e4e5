//! Subcommand implementations: fetch, ingest, check, report.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use redcap_api::{
    ApiConfig, ExportFormat, MetadataExportRequest, RawOrLabel, RecordExportRequest, RedcapClient,
};
use redcap_check::{
    FieldTypeSummary, MissingVariableReport, choice_summaries, classify_missing,
    field_type_counts, fields_of_type, variable_types,
};
use redcap_ingest::{
    parse_metadata_csv, parse_records_csv, read_expected_variables, write_records_csv,
};
use redcap_model::{FieldType, MetadataTable};
use redcap_report::{
    BarChart, MissingSummary, write_choice_summaries_csv, write_field_list_csv,
    write_field_type_counts_csv, write_missing_report_csv, write_missing_summary_json,
};

use crate::cli::{ChoicesArgs, FieldTypesArgs, MetadataArgs, MissingArgs, RecordsArgs};
use crate::types::{ChoicesResult, FieldTypesResult, MetadataResult, MissingResult, RecordsResult};

/// Metadata either comes from a saved export or a live fetch. A fetch
/// failure aborts here; classification never runs on a partial table.
fn load_metadata(config_path: &Path, metadata_file: Option<&PathBuf>) -> Result<MetadataTable> {
    let text = match metadata_file {
        Some(path) => {
            debug!(path = %path.display(), "reading saved metadata export");
            std::fs::read_to_string(path)
                .with_context(|| format!("read metadata file {}", path.display()))?
        }
        None => {
            let client = connect(config_path)?;
            client
                .export_metadata(&MetadataExportRequest::default())
                .context("export metadata")?
        }
    };
    let table = parse_metadata_csv(&text).context("parse metadata export")?;
    info!(fields = table.len(), "metadata loaded");
    Ok(table)
}

fn connect(config_path: &Path) -> Result<RedcapClient> {
    let config = ApiConfig::load(config_path)
        .with_context(|| format!("load config {}", config_path.display()))?;
    RedcapClient::new(config).context("build API client")
}

pub fn run_records(args: &RecordsArgs, config_path: &Path) -> Result<RecordsResult> {
    let client = connect(config_path)?;
    let request = RecordExportRequest {
        raw_or_label: if args.labels {
            RawOrLabel::Label
        } else {
            RawOrLabel::Raw
        },
        format: ExportFormat::Csv,
        ..RecordExportRequest::default()
    };
    let body = client.export_records(&request).context("export records")?;
    let mut table = parse_records_csv(&body).context("parse record export")?;
    let excluded: Vec<&str> = args.exclude.iter().map(String::as_str).collect();
    table.drop_columns(&excluded);
    write_records_csv(&table, &args.out, args.delimiter as u8)
        .with_context(|| format!("write records to {}", args.out.display()))?;
    Ok(RecordsResult {
        rows: table.rows.len(),
        columns: table.headers.len(),
        out: args.out.clone(),
    })
}

pub fn run_metadata(args: &MetadataArgs, config_path: &Path) -> Result<MetadataResult> {
    let client = connect(config_path)?;
    let body = client
        .export_metadata(&MetadataExportRequest::default())
        .context("export metadata")?;
    // Parse before saving so a malformed export fails loudly instead of
    // leaving a broken file for later runs.
    let table = parse_metadata_csv(&body).context("parse metadata export")?;
    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    std::fs::write(&args.out, &body)
        .with_context(|| format!("write metadata to {}", args.out.display()))?;
    Ok(MetadataResult {
        fields: table.len(),
        out: args.out.clone(),
    })
}

pub fn run_missing(args: &MissingArgs, config_path: &Path) -> Result<MissingResult> {
    let expected = read_expected_variables(&args.expected)
        .with_context(|| format!("read expected variables {}", args.expected.display()))?;
    let metadata = load_metadata(config_path, args.metadata_file.as_ref())?;
    let report = classify_missing(&expected, &metadata);

    std::fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("create directory {}", args.output_dir.display()))?;
    let csv_path = args.output_dir.join("missing_variables_report.csv");
    write_missing_report_csv(&report, &csv_path).context("write missing-variable report")?;
    let json_path = args.output_dir.join("missing_variables_summary.json");
    let summary = MissingSummary::new(&report, expected.len());
    write_missing_summary_json(&summary, &json_path).context("write summary JSON")?;
    let chart_path = if args.no_chart {
        None
    } else {
        let path = args.output_dir.join("missing_variables_summary.png");
        missing_chart(&report)
            .render_png(&path)
            .context("render missing-variable chart")?;
        Some(path)
    };
    let present_types = args.show_types.then(|| {
        let names: Vec<&str> = expected.iter().map(String::as_str).collect();
        variable_types(&metadata, &names)
            .into_iter()
            .map(|(name, field_type)| (name.to_string(), field_type.as_str().to_string()))
            .collect()
    });
    Ok(MissingResult {
        expected: expected.len(),
        report,
        csv_path,
        json_path,
        chart_path,
        present_types,
    })
}

fn missing_chart(report: &MissingVariableReport) -> BarChart {
    BarChart::new(
        "Summary of Missing Variables by Category",
        "Count of Missing Variables",
    )
    .with_bars(
        report
            .category_counts()
            .into_iter()
            .map(|(category, count)| (category.label(), count)),
    )
}

pub fn run_field_types(args: &FieldTypesArgs, config_path: &Path) -> Result<FieldTypesResult> {
    let metadata = load_metadata(config_path, args.metadata_file.as_ref())?;
    let counts = field_type_counts(&metadata);

    std::fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("create directory {}", args.output_dir.display()))?;
    let csv_path = args.output_dir.join("field_type_distribution.csv");
    write_field_type_counts_csv(&counts, &csv_path).context("write field-type distribution")?;
    let chart_path = if args.no_chart {
        None
    } else {
        let path = args.output_dir.join("field_type_distribution.png");
        distribution_chart(&counts)
            .render_png(&path)
            .context("render field-type chart")?;
        Some(path)
    };

    let mut field_lists = Vec::new();
    for raw_type in &args.save_fields {
        let field_type = FieldType::parse(raw_type);
        let (names, _) = fields_of_type(&metadata, &field_type);
        let path = args
            .output_dir
            .join(format!("{}_fields.csv", field_type.as_str()));
        write_field_list_csv(&names, &path)
            .with_context(|| format!("write {} field list", field_type.as_str()))?;
        field_lists.push((field_type.as_str().to_string(), names.len(), path));
    }

    Ok(FieldTypesResult {
        total_fields: metadata.len(),
        counts,
        csv_path,
        chart_path,
        field_lists,
    })
}

fn distribution_chart(counts: &[FieldTypeSummary]) -> BarChart {
    BarChart::new("Distribution of Field Types in Metadata", "Count").with_bars(
        counts
            .iter()
            .map(|summary| (summary.field_type.clone(), summary.count)),
    )
}

pub fn run_choices(args: &ChoicesArgs, config_path: &Path) -> Result<ChoicesResult> {
    let metadata = load_metadata(config_path, args.metadata_file.as_ref())?;
    let mut summaries = choice_summaries(&metadata);
    if !args.fields.is_empty() {
        summaries.retain(|summary| args.fields.contains(&summary.field_name));
    }
    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    write_choice_summaries_csv(&summaries, &args.out).context("write choice summaries")?;
    Ok(ChoicesResult {
        summaries,
        out: args.out.clone(),
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::Path;

    use super::run_missing;
    use crate::cli::MissingArgs;

    const METADATA: &str = "\
field_name,form_name,section_header,field_type,field_label,select_choices_or_calculations
sex_bio,demographics,,radio,Biological sex,\"1, Male | 2, Female\"
height,demographics,,text,Height (cm),
";

    fn write_file(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).expect("create file");
        file.write_all(content.as_bytes()).expect("write file");
        path
    }

    #[test]
    fn missing_with_show_types_lists_present_variables() {
        let dir = tempfile::tempdir().expect("temp dir");
        let metadata_file = write_file(dir.path(), "metadata.csv", METADATA);
        let expected = write_file(dir.path(), "expected.csv", "sex_bio\nheight\nweight\n");
        let args = MissingArgs {
            expected,
            metadata_file: Some(metadata_file),
            output_dir: dir.path().join("results"),
            no_chart: true,
            show_types: true,
        };
        // Config path is never touched when a metadata file is supplied.
        let result = run_missing(&args, Path::new("unused.toml")).expect("run missing");
        assert_eq!(result.report.other_missing.len(), 1);
        let present = result.present_types.expect("types requested");
        assert_eq!(
            present,
            vec![
                ("sex_bio".to_string(), "radio".to_string()),
                ("height".to_string(), "text".to_string()),
            ]
        );
    }

    #[test]
    fn missing_without_show_types_skips_lookup() {
        let dir = tempfile::tempdir().expect("temp dir");
        let metadata_file = write_file(dir.path(), "metadata.csv", METADATA);
        let expected = write_file(dir.path(), "expected.csv", "weight\n");
        let args = MissingArgs {
            expected,
            metadata_file: Some(metadata_file),
            output_dir: dir.path().join("results"),
            no_chart: true,
            show_types: false,
        };
        let result = run_missing(&args, Path::new("unused.toml")).expect("run missing");
        assert!(result.present_types.is_none());
        assert!(result.csv_path.exists());
        assert!(result.json_path.exists());
    }
}
