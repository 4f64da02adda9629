//! `dtr report` command implementation.

use clap::{Args, ValueEnum};
use dtr_config::{ApiMode, Config};
use dtr_renderer::{ReportRenderer, escape_html};
use dtr_store::{ReportStore, StoreError, open_store};
use tracing::warn;

use super::{RenderOptions, renderer_from_config, write_html};
use crate::error::CliError;
use crate::output::Output;

/// Report source selectable on the command line.
#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    /// Fetch from the report API.
    Real,
    /// Read the local fixture file.
    Mock,
}

impl From<Mode> for ApiMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Real => Self::Real,
            Mode::Mock => Self::Mock,
        }
    }
}

/// Arguments for the report command.
#[derive(Args)]
pub(crate) struct ReportArgs {
    /// Run identifier returned when the run was created.
    run_id: String,

    /// Report source (overrides config).
    #[arg(long, value_enum)]
    mode: Option<Mode>,

    /// Report API base URL (overrides config).
    #[arg(long, env = "DTR_API_BASE")]
    api_base: Option<String>,

    #[command(flatten)]
    options: RenderOptions,
}

impl ReportArgs {
    /// Execute the report command.
    ///
    /// On fetch failure the error is still written as markup, then returned.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the report cannot be fetched.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let mut cli_settings = self.options.cli_settings();
        cli_settings.mode = self.mode.map(ApiMode::from);
        cli_settings.base_url = self.api_base;
        let config = Config::load(self.options.config.as_deref(), Some(&cli_settings))?;

        let store = open_store(&config.api);
        let renderer = renderer_from_config(&config.render);

        match report_html(
            store.as_ref(),
            &self.run_id,
            &renderer,
            &config.render.placeholder,
        ) {
            Ok(html) => {
                write_html(&html)?;
                Ok(())
            }
            Err(err) => {
                write_html(&error_html(&err))?;
                if matches!(err, StoreError::NotFound { .. }) {
                    output.warning(&format!("No report stored for run {}", self.run_id));
                }
                Err(err.into())
            }
        }
    }
}

/// Fetch the report for `run_id` and render its body.
///
/// A report without a markdown body renders `placeholder` instead.
fn report_html(
    store: &dyn ReportStore,
    run_id: &str,
    renderer: &ReportRenderer,
    placeholder: &str,
) -> Result<String, StoreError> {
    let report = store.fetch_report(run_id)?;
    if report.markdown.as_deref().is_none_or(str::is_empty) {
        warn!(run_id, "Report has no markdown body, using placeholder");
    }
    Ok(renderer.render(report.body_or(placeholder)))
}

/// Markup shown in place of a report that could not be fetched.
fn error_html(err: &StoreError) -> String {
    format!(
        r#"<p class="error">Error: {}</p>"#,
        escape_html(&err.to_string())
    )
}

#[cfg(test)]
mod tests {
    use dtr_store::MemoryReportStore;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_report_html_renders_body() {
        let store = MemoryReportStore::new()
            .with_report("run-1", "# Example\n| a | b |\n| --- | --- |\n| 2 | 3 |\n");
        let html = report_html(&store, "run-1", &ReportRenderer::new(), "(empty)").unwrap();
        assert_eq!(
            html,
            "<h1>Example</h1><table><tbody><tr><td>a</td><td>b</td></tr><tr><td>2</td><td>3</td></tr></tbody></table>"
        );
    }

    #[test]
    fn test_report_html_placeholder_for_missing_body() {
        let store = MemoryReportStore::new().with_empty_report("run-2");
        let html = report_html(&store, "run-2", &ReportRenderer::new(), "(empty)").unwrap();
        assert_eq!(html, "<p>(empty)</p>");
    }

    #[test]
    fn test_report_html_placeholder_for_empty_body() {
        let store = MemoryReportStore::new().with_report("run-3", "");
        let html = report_html(&store, "run-3", &ReportRenderer::new(), "(no report)").unwrap();
        assert_eq!(html, "<p>(no report)</p>");
    }

    #[test]
    fn test_report_html_not_found() {
        let store = MemoryReportStore::new();
        let err = report_html(&store, "run-4", &ReportRenderer::new(), "(empty)").unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[test]
    fn test_report_html_escapes_when_enabled() {
        let store = MemoryReportStore::new().with_report("run-5", "<script>alert(1)</script>");
        let renderer = ReportRenderer::new().with_escaping(true);
        let html = report_html(&store, "run-5", &renderer, "(empty)").unwrap();
        assert_eq!(html, "<p>&lt;script&gt;alert(1)&lt;/script&gt;</p>");
    }

    #[test]
    fn test_error_html_escapes_message() {
        let err = StoreError::HttpResponse {
            status: 502,
            body: "<html>Bad Gateway</html>".to_owned(),
        };
        assert_eq!(
            error_html(&err),
            r#"<p class="error">Error: HTTP error: 502 - &lt;html&gt;Bad Gateway&lt;/html&gt;</p>"#
        );
    }

    #[test]
    fn test_mode_into_api_mode() {
        assert_eq!(ApiMode::from(Mode::Mock), ApiMode::Mock);
        assert_eq!(ApiMode::from(Mode::Real), ApiMode::Real);
    }
}
