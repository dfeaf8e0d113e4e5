#![deny(unsafe_code)]

//! CSV ingestion for REDCap exports.
//!
//! Metadata exports become a typed [`redcap_model::MetadataTable`], failing
//! fast when a required column is absent. Record exports stay as a plain
//! header/row table since their columns vary per project.

mod error;
mod expected;
mod metadata;
mod records;

pub use error::{IngestError, Result};
pub use expected::read_expected_variables;
pub use metadata::parse_metadata_csv;
pub use records::{RecordTable, parse_records_csv, write_records_csv};
