//! Blocking HTTP client for the export endpoint.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, info};

use crate::config::ApiConfig;
use crate::error::{ApiError, Result};
use crate::request::{MetadataExportRequest, RecordExportRequest};

/// HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for one REDCap instance.
pub struct RedcapClient {
    client: Client,
    config: ApiConfig,
}

impl RedcapClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(ApiError::Network)?;
        Ok(Self { client, config })
    }

    /// Export flat study records; returns the raw response body.
    pub fn export_records(&self, request: &RecordExportRequest) -> Result<String> {
        info!("exporting records");
        self.post(request.form_fields())
    }

    /// Export field metadata; returns the raw response body.
    pub fn export_metadata(&self, request: &MetadataExportRequest) -> Result<String> {
        info!("exporting metadata");
        self.post(request.form_fields())
    }

    /// POST the form payload, adding the token. A non-success status is a
    /// fetch failure carrying the response body (REDCap returns a JSON error
    /// description), never an empty export.
    fn post(&self, mut fields: Vec<(&'static str, String)>) -> Result<String> {
        fields.push(("token", self.config.api_token.clone()));
        let response = self
            .client
            .post(&self.config.api_url)
            .form(&fields)
            .send()
            .map_err(ApiError::Network)?;
        let status = response.status();
        let body = response.text().map_err(ApiError::Network)?;
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        debug!(bytes = body.len(), "export complete");
        Ok(body)
    }
}
