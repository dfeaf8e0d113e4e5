#![deny(unsafe_code)]

//! Metadata checks over a typed [`redcap_model::MetadataTable`].
//!
//! The central check is [`classify_missing`], which compares an expected
//! variable set against the field names present in the metadata and buckets
//! the absentees by REDCap naming conventions. The remaining functions are
//! small analyses of the metadata itself: type distribution, type lookup for
//! chosen fields, and option counts for choice-bearing fields.

mod analysis;
mod missing;

pub use analysis::{
    ChoiceSummary, FieldTypeSummary, choice_summaries, field_type_counts, fields_of_type,
    variable_types,
};
pub use missing::{MissingCategory, MissingVariableReport, classify_missing};
