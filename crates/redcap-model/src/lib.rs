#![deny(unsafe_code)]

//! Typed model for REDCap metadata exports.
//!
//! REDCap's metadata export is a CSV with one row per study field. This crate
//! turns those rows into validated records so that downstream analysis never
//! has to look columns up by string name at the point of use.

mod choices;
mod error;
mod field_type;
mod metadata;

pub use choices::{ChoiceOption, parse_choices};
pub use error::{ModelError, Result};
pub use field_type::FieldType;
pub use metadata::{MetadataRecord, MetadataTable};
