//! CLI command implementations.

pub(crate) mod render;
pub(crate) mod report;

pub(crate) use render::RenderArgs;
pub(crate) use report::ReportArgs;

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use dtr_config::{CliSettings, RenderConfig};
use dtr_renderer::{CellSplit, ReportRenderer};

/// Rendering flags shared by all commands.
#[derive(Args)]
pub(crate) struct RenderOptions {
    /// Path to configuration file (default: auto-discover dtr.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Escape HTML in report text (default: from config, enabled).
    #[arg(long)]
    escape: Option<bool>,

    /// Emit report text verbatim.
    #[arg(long, conflicts_with = "escape")]
    no_escape: bool,

    /// Keep empty table cells instead of dropping them.
    #[arg(long)]
    preserve_empty_cells: bool,
}

impl RenderOptions {
    /// CLI overrides for the `[render]` section.
    fn cli_settings(&self) -> CliSettings {
        CliSettings {
            escape_html: self.resolve_escape(),
            preserve_empty_cells: self.preserve_empty_cells.then_some(true),
            ..Default::default()
        }
    }

    fn resolve_escape(&self) -> Option<bool> {
        if self.no_escape {
            Some(false)
        } else {
            self.escape
        }
    }
}

/// Build a renderer from the `[render]` config section.
pub(crate) fn renderer_from_config(config: &RenderConfig) -> ReportRenderer {
    let cell_split = if config.preserve_empty_cells {
        CellSplit::Preserve
    } else {
        CellSplit::Lossy
    };
    ReportRenderer::new()
        .with_escaping(config.escape_html)
        .with_cell_split(cell_split)
}

/// Write rendered markup to stdout, newline-terminated.
pub(crate) fn write_html(html: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(html.as_bytes())?;
    stdout.write_all(b"\n")?;
    stdout.flush()
}
