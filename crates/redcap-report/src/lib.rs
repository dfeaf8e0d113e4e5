#![deny(unsafe_code)]

//! Report serialization for metadata checks.
//!
//! CSV artifacts mirror the shapes downstream spreadsheets expect (one
//! column per missing category, ragged lengths padded), a JSON summary
//! carries per-category counts for machine consumption, and bar charts are
//! built as SVG and rasterized to PNG.

mod chart;
mod error;
mod missing;
mod tables;

pub use chart::BarChart;
pub use error::{ReportError, Result};
pub use missing::{MissingSummary, write_missing_report_csv, write_missing_summary_json};
pub use tables::{write_choice_summaries_csv, write_field_list_csv, write_field_type_counts_csv};
