//! In-memory report store for testing.
//!
//! Provides [`MemoryReportStore`] for unit testing without network access.

use std::collections::HashMap;

use crate::error::StoreError;
use crate::report::{Report, ReportStore, validate_run_id};

/// In-memory report store.
///
/// # Example
///
/// ```ignore
/// use dtr_store::{MemoryReportStore, ReportStore};
///
/// let store = MemoryReportStore::new().with_report("run-1", "# Result");
/// let report = store.fetch_report("run-1").unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MemoryReportStore {
    reports: HashMap<String, Report>,
}

impl MemoryReportStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a report with a markdown body.
    #[must_use]
    pub fn with_report(mut self, run_id: impl Into<String>, markdown: impl Into<String>) -> Self {
        let run_id = run_id.into();
        self.reports.insert(
            run_id.clone(),
            Report {
                run_id,
                markdown: Some(markdown.into()),
            },
        );
        self
    }

    /// Add a report document that has no markdown body.
    #[must_use]
    pub fn with_empty_report(mut self, run_id: impl Into<String>) -> Self {
        let run_id = run_id.into();
        self.reports.insert(
            run_id.clone(),
            Report {
                run_id,
                markdown: None,
            },
        );
        self
    }
}

impl ReportStore for MemoryReportStore {
    fn fetch_report(&self, run_id: &str) -> Result<Report, StoreError> {
        validate_run_id(run_id)?;
        self.reports
            .get(run_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                run_id: run_id.to_owned(),
                message: "Report not found".to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_known_report() {
        let store = MemoryReportStore::new().with_report("run-1", "# Result");
        let report = store.fetch_report("run-1").unwrap();
        assert_eq!(report.run_id, "run-1");
        assert_eq!(report.markdown.as_deref(), Some("# Result"));
    }

    #[test]
    fn test_fetch_unknown_report() {
        let store = MemoryReportStore::new();
        assert!(matches!(
            store.fetch_report("run-2"),
            Err(StoreError::NotFound { .. })
        ));
    }

    #[test]
    fn test_fetch_empty_report() {
        let store = MemoryReportStore::new().with_empty_report("run-3");
        assert_eq!(store.fetch_report("run-3").unwrap().markdown, None);
    }
}
