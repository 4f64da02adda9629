//! Builder for report bodies in the renderer's markdown subset.

use std::fmt::Display;

/// Accumulates headings, text lines and tables into a report body.
///
/// # Example
///
/// ```
/// use dtr_renderer::ReportWriter;
///
/// let mut report = ReportWriter::new();
/// report.h1("Sum");
/// report.table(&["a", "b", "a + b"], [[1, 2, 3]]);
/// report.text("Done.");
///
/// assert_eq!(
///     report.finish(),
///     "# Sum\n| a | b | a + b |\n| --- | --- | --- |\n| 1 | 2 | 3 |\n\nDone.\n"
/// );
/// ```
#[derive(Debug, Default)]
pub struct ReportWriter {
    parts: Vec<String>,
}

impl ReportWriter {
    /// Create an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a level 1 heading.
    pub fn h1(&mut self, text: &str) {
        self.parts.push(format!("# {text}\n"));
    }

    /// Append a level 2 heading.
    pub fn h2(&mut self, text: &str) {
        self.parts.push(format!("## {text}\n"));
    }

    /// Append a plain text line.
    pub fn text(&mut self, text: &str) {
        self.parts.push(format!("{text}\n"));
    }

    /// Append a table: header row, separator row, data rows, then a blank line.
    pub fn table<H, R, C>(&mut self, headers: &[H], rows: R)
    where
        H: AsRef<str>,
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Display,
    {
        let headers: Vec<&str> = headers.iter().map(AsRef::as_ref).collect();
        self.parts.push(format!("| {} |\n", headers.join(" | ")));
        self.parts
            .push(format!("| {} |\n", vec!["---"; headers.len()].join(" | ")));
        for row in rows {
            let cells: Vec<String> = row.into_iter().map(|cell| cell.to_string()).collect();
            self.parts.push(format!("| {} |\n", cells.join(" | ")));
        }
        self.parts.push("\n".to_owned());
    }

    /// Finish the report: surrounding whitespace trimmed, one trailing newline.
    #[must_use]
    pub fn finish(self) -> String {
        let body = self.parts.concat();
        format!("{}\n", body.trim())
    }
}
