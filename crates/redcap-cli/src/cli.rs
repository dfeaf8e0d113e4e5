//! CLI argument definitions for the REDCap metadata toolkit.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "redcap-meta",
    version,
    about = "REDCap metadata toolkit - export study data and check field metadata",
    long_about = "Export records and field metadata from a REDCap instance and\n\
                  post-process the metadata: field-type filtering, label/option\n\
                  counts, and missing-variable classification with CSV and chart\n\
                  reports."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the TOML config with [redcap] api_url and api_token.
    #[arg(
        long = "config",
        value_name = "PATH",
        default_value = "redcap.toml",
        global = true
    )]
    pub config: PathBuf,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Export flat study records to a CSV file.
    Records(RecordsArgs),

    /// Export field metadata to a CSV file.
    Metadata(MetadataArgs),

    /// Classify expected variables missing from the metadata.
    Missing(MissingArgs),

    /// Show the field-type distribution of the metadata.
    FieldTypes(FieldTypesArgs),

    /// List choice-bearing fields with their option counts.
    Choices(ChoicesArgs),
}

#[derive(Parser)]
pub struct RecordsArgs {
    /// Output file for the exported records.
    #[arg(long = "out", value_name = "PATH", default_value = "records.csv")]
    pub out: PathBuf,

    /// Columns to exclude from the saved file (repeatable).
    #[arg(long = "exclude", value_name = "COLUMN")]
    pub exclude: Vec<String>,

    /// Delimiter for the saved file.
    #[arg(long = "delimiter", default_value = ";")]
    pub delimiter: char,

    /// Export labels instead of raw coded values.
    #[arg(long = "labels")]
    pub labels: bool,
}

#[derive(Parser)]
pub struct MetadataArgs {
    /// Output file for the exported metadata.
    #[arg(long = "out", value_name = "PATH", default_value = "metadata.csv")]
    pub out: PathBuf,
}

#[derive(Parser)]
pub struct MissingArgs {
    /// One-column CSV of expected variable names.
    #[arg(value_name = "EXPECTED_CSV")]
    pub expected: PathBuf,

    /// Use a previously saved metadata CSV instead of calling the API.
    #[arg(long = "metadata-file", value_name = "PATH")]
    pub metadata_file: Option<PathBuf>,

    /// Directory for the report CSV, JSON summary, and chart.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "results")]
    pub output_dir: PathBuf,

    /// Skip the PNG chart.
    #[arg(long = "no-chart")]
    pub no_chart: bool,

    /// Also list the field type of each expected variable present in the
    /// metadata.
    #[arg(long = "show-types")]
    pub show_types: bool,
}

#[derive(Parser)]
pub struct FieldTypesArgs {
    /// Use a previously saved metadata CSV instead of calling the API.
    #[arg(long = "metadata-file", value_name = "PATH")]
    pub metadata_file: Option<PathBuf>,

    /// Directory for the distribution CSV and chart.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "results")]
    pub output_dir: PathBuf,

    /// Also write a field-list CSV for this type (repeatable).
    #[arg(long = "save-fields", value_name = "TYPE")]
    pub save_fields: Vec<String>,

    /// Skip the PNG chart.
    #[arg(long = "no-chart")]
    pub no_chart: bool,
}

#[derive(Parser)]
pub struct ChoicesArgs {
    /// Use a previously saved metadata CSV instead of calling the API.
    #[arg(long = "metadata-file", value_name = "PATH")]
    pub metadata_file: Option<PathBuf>,

    /// Restrict the summary to these field names (repeatable).
    #[arg(long = "fields", value_name = "FIELD")]
    pub fields: Vec<String>,

    /// Output file for the choice summary CSV.
    #[arg(
        long = "out",
        value_name = "PATH",
        default_value = "variables_with_choices_labels.csv"
    )]
    pub out: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
