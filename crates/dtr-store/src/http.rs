//! Report API client over HTTP.

use std::time::Duration;

use dtr_config::ApiConfig;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Deserialize;
use tracing::{debug, info};
use ureq::Agent;

use crate::error::StoreError;
use crate::report::{Report, ReportStore, validate_run_id};

/// Unreserved path characters: A-Z a-z 0-9 - . _ ~
const PATH_SEGMENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Error body returned by the report API (`{"error": "..."}`).
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Sync client for `GET {base_url}/api/reports/{run_id}`.
pub struct HttpReportStore {
    agent: Agent,
    base_url: String,
}

impl HttpReportStore {
    /// Create a client for the API at `base_url`.
    #[must_use]
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Create a client from the `[api]` config section.
    #[must_use]
    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(&config.base_url, Duration::from_secs(config.timeout_secs))
    }

    /// URL of the report for `run_id`, with the id encoded as one path segment.
    fn report_url(&self, run_id: &str) -> String {
        format!(
            "{}/api/reports/{}",
            self.base_url,
            utf8_percent_encode(run_id, PATH_SEGMENT_SET)
        )
    }
}

impl ReportStore for HttpReportStore {
    fn fetch_report(&self, run_id: &str) -> Result<Report, StoreError> {
        validate_run_id(run_id)?;
        let url = self.report_url(run_id);

        info!("Fetching report for run {}", run_id);

        let response = self
            .agent
            .get(&url)
            .header("Accept", "application/json")
            .call()?;

        let status = response.status().as_u16();
        let mut body_reader = response.into_body();

        if status >= 400 {
            let error_body = body_reader
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            debug!(status, body = %error_body, "Report API returned an error");

            if status == 404 {
                let message = serde_json::from_str::<ErrorBody>(&error_body)
                    .map_or_else(|_| "Report not found".to_owned(), |body| body.error);
                return Err(StoreError::NotFound {
                    run_id: run_id.to_owned(),
                    message,
                });
            }
            return Err(StoreError::HttpResponse {
                status,
                body: error_body,
            });
        }

        let report: Report = body_reader.read_json()?;
        debug!(
            run_id = %report.run_id,
            has_markdown = report.markdown.is_some(),
            "Report fetched"
        );
        Ok(report)
    }
}
