//! Report document and the store trait.

use serde::Deserialize;

use crate::error::StoreError;

/// Report document returned by the report API.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Report {
    /// Run the report belongs to.
    #[serde(default)]
    pub run_id: String,
    /// Markdown-subset report body.
    #[serde(default)]
    pub markdown: Option<String>,
}

impl Report {
    /// Report body, or `placeholder` when the body is missing or empty.
    #[must_use]
    pub fn body_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        match self.markdown.as_deref() {
            Some(markdown) if !markdown.is_empty() => markdown,
            _ => placeholder,
        }
    }
}

/// Source of run reports, addressed by an opaque run identifier.
pub trait ReportStore: Send + Sync {
    /// Fetch the report for `run_id`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when no report exists for the run, and
    /// transport or decoding errors otherwise.
    fn fetch_report(&self, run_id: &str) -> Result<Report, StoreError>;
}

/// Reject run ids that cannot address a report.
pub(crate) fn validate_run_id(run_id: &str) -> Result<(), StoreError> {
    if run_id.trim().is_empty() {
        return Err(StoreError::InvalidRunId(run_id.to_owned()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_deserialize_report() {
        let report: Report =
            serde_json::from_str(r##"{"run_id": "65f0a1", "markdown": "# Result\n"}"##).unwrap();
        assert_eq!(report.run_id, "65f0a1");
        assert_eq!(report.markdown.as_deref(), Some("# Result\n"));
    }

    #[test]
    fn test_deserialize_report_without_markdown() {
        let report: Report = serde_json::from_str(r#"{"run_id": "65f0a1"}"#).unwrap();
        assert_eq!(report.markdown, None);
    }

    #[test]
    fn test_deserialize_report_null_markdown() {
        let report: Report =
            serde_json::from_str(r#"{"run_id": "65f0a1", "markdown": null}"#).unwrap();
        assert_eq!(report.markdown, None);
    }

    #[test]
    fn test_body_or_present() {
        let report = Report {
            run_id: "1".to_owned(),
            markdown: Some("text".to_owned()),
        };
        assert_eq!(report.body_or("(empty)"), "text");
    }

    #[test]
    fn test_body_or_missing_or_empty() {
        let mut report = Report::default();
        assert_eq!(report.body_or("(empty)"), "(empty)");
        report.markdown = Some(String::new());
        assert_eq!(report.body_or("(empty)"), "(empty)");
    }

    #[test]
    fn test_validate_run_id() {
        assert!(validate_run_id("65f0a1b2c3d4e5f6a7b8c9d0").is_ok());
        assert!(matches!(
            validate_run_id("  "),
            Err(StoreError::InvalidRunId(_))
        ));
        assert!(validate_run_id("").is_err());
    }
}
