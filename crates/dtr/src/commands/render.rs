//! `dtr render` command implementation.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Args;
use dtr_config::Config;
use tracing::debug;

use super::{RenderOptions, renderer_from_config, write_html};
use crate::error::CliError;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Report markdown file (`-` or omitted: read stdin).
    file: Option<PathBuf>,

    #[command(flatten)]
    options: RenderOptions,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the input cannot be read.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let cli_settings = self.options.cli_settings();
        let config = Config::load(self.options.config.as_deref(), Some(&cli_settings))?;

        let text = read_input(self.file.as_deref())?;
        debug!(bytes = text.len(), "Rendering report body");

        let html = renderer_from_config(&config.render).render(&text);
        write_html(&html)?;
        Ok(())
    }
}

/// Read the report body from `path`, or stdin for `None` and `-`.
fn read_input(path: Option<&Path>) -> std::io::Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path),
        _ => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_input_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.md");
        std::fs::write(&path, "# Result\n").unwrap();

        assert_eq!(read_input(Some(&path)).unwrap(), "# Result\n");
    }

    #[test]
    fn test_read_input_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_input(Some(&dir.path().join("absent.md"))).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
