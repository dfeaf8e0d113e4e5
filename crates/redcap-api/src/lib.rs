#![deny(unsafe_code)]

//! REDCap export API client.
//!
//! The REDCap API is a single POST endpoint taking a form-encoded payload;
//! `content` selects what is exported (`record`, `metadata`, ...) and
//! `format` selects the body encoding of the response. This crate wraps that
//! endpoint behind typed request builders and an explicit [`ApiConfig`] so
//! the token and base URL are always passed in by the caller, never read
//! from ambient state.

mod client;
mod config;
mod error;
mod request;

pub use client::RedcapClient;
pub use config::{ApiConfig, TOKEN_ENV_VAR};
pub use error::{ApiError, Result};
pub use request::{ExportFormat, MetadataExportRequest, RawOrLabel, RecordExportRequest};
