//! Fixture-file report store for mock mode.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::StoreError;
use crate::report::{Report, ReportStore, validate_run_id};

/// Serves one JSON report file for every run.
///
/// Used in mock mode to preview reports without a running API.
#[derive(Debug)]
pub struct FixtureReportStore {
    path: PathBuf,
}

impl FixtureReportStore {
    /// Create a store backed by the JSON file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the fixture file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportStore for FixtureReportStore {
    fn fetch_report(&self, run_id: &str) -> Result<Report, StoreError> {
        validate_run_id(run_id)?;
        debug!(path = %self.path.display(), "Reading report fixture");

        let content = std::fs::read_to_string(&self.path)?;
        let report: Report = serde_json::from_str(&content)?;

        if !report.run_id.is_empty() && report.run_id != run_id {
            warn!(
                requested = run_id,
                fixture = %report.run_id,
                "Fixture report belongs to a different run"
            );
        }
        Ok(report)
    }
}
