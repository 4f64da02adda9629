//! Report renderer with configurable escaping and cell splitting.

use crate::cells::CellSplit;
use crate::html::HtmlWriter;
use crate::scanner::Scanner;

/// Renders report bodies to HTML.
///
/// Stateless between calls: every [`render`](Self::render) starts outside a
/// table, so one renderer can be shared across threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReportRenderer {
    escape: bool,
    cell_split: CellSplit,
}

impl ReportRenderer {
    /// Create a renderer that emits text verbatim and drops empty cells.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Escape markup-significant characters in heading, cell and paragraph text.
    ///
    /// Enable this whenever the report body may contain untrusted input.
    #[must_use]
    pub fn with_escaping(mut self, enabled: bool) -> Self {
        self.escape = enabled;
        self
    }

    /// Set how empty table cells are treated.
    #[must_use]
    pub fn with_cell_split(mut self, cell_split: CellSplit) -> Self {
        self.cell_split = cell_split;
        self
    }

    /// Event stream for `text`, without producing markup.
    #[must_use]
    pub fn events<'a>(&self, text: &'a str) -> Scanner<'a> {
        Scanner::new(text, self.cell_split)
    }

    /// Render `text` to HTML.
    #[must_use]
    pub fn render(&self, text: &str) -> String {
        let mut writer = HtmlWriter::new(text.len() + text.len() / 2, self.escape);
        for event in self.events(text) {
            writer.event(&event);
        }
        writer.finish()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::render;

    #[test]
    fn test_plain_line_is_single_paragraph() {
        assert_eq!(render("just some text"), "<p>just some text</p>");
        assert_eq!(render("a | b"), "<p>a | b</p>");
        assert_eq!(render("  padded  "), "<p>  padded  </p>");
    }

    #[test]
    fn test_heading_precedence() {
        assert_eq!(render("## Title"), "<h2>Title</h2>");
        assert_eq!(render("# Title"), "<h1>Title</h1>");
        assert_eq!(render("### Title"), "<p>### Title</p>");
    }

    #[test]
    fn test_table_with_separator_row() {
        assert_eq!(
            render("|A|B|\n|---|---|\n|1|2|"),
            "<table><tbody><tr><td>A</td><td>B</td></tr><tr><td>1</td><td>2</td></tr></tbody></table>"
        );
    }

    #[test]
    fn test_table_closed_by_paragraph() {
        assert_eq!(
            render("|A|B|\nnext paragraph"),
            "<table><tbody><tr><td>A</td><td>B</td></tr></tbody></table><p>next paragraph</p>"
        );
    }

    #[test]
    fn test_empty_cell_dropped_by_default() {
        assert_eq!(
            render("|A||B|"),
            "<table><tbody><tr><td>A</td><td>B</td></tr></tbody></table>"
        );
    }

    #[test]
    fn test_empty_cell_preserved_on_request() {
        let renderer = ReportRenderer::new().with_cell_split(CellSplit::Preserve);
        assert_eq!(
            renderer.render("|A||B|"),
            "<table><tbody><tr><td>A</td><td></td><td>B</td></tr></tbody></table>"
        );
    }

    #[test]
    fn test_unterminated_table_is_closed() {
        let html = render("## Scores\n| a | 1 |\n| b | 2 |\n");
        assert_eq!(
            html,
            "<h2>Scores</h2><table><tbody><tr><td>a</td><td>1</td></tr><tr><td>b</td><td>2</td></tr></tbody></table>"
        );
        assert_eq!(html.matches("<table>").count(), html.matches("</table>").count());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(render(""), "");
    }

    #[test]
    fn test_single_empty_line() {
        assert_eq!(render("\n"), "<p></p>");
    }

    #[test]
    fn test_blank_lines_become_empty_paragraphs() {
        assert_eq!(render("a\n\nb"), "<p>a</p><p></p><p>b</p>");
    }

    #[test]
    fn test_escaping_enabled() {
        let renderer = ReportRenderer::new().with_escaping(true);
        assert_eq!(
            renderer.render("# <img src=x>\n|a<b|c|"),
            "<h1>&lt;img src=x&gt;</h1><table><tbody><tr><td>a&lt;b</td><td>c</td></tr></tbody></table>"
        );
    }

    #[test]
    fn test_render_is_repeatable() {
        let renderer = ReportRenderer::new();
        let text = "|A|\n# T";
        assert_eq!(renderer.render(text), renderer.render(text));
    }

    #[test]
    fn test_full_report() {
        let report = "# AHP result\n\
                      ## Weights\n\
                      | criterion | weight |\n\
                      | --- | --- |\n\
                      | cost | 0.6 |\n\
                      | quality | 0.4 |\n\
                      \n\
                      Best alternative: A2";
        assert_eq!(
            render(report),
            "<h1>AHP result</h1>\
             <h2>Weights</h2>\
             <table><tbody>\
             <tr><td>criterion</td><td>weight</td></tr>\
             <tr><td>cost</td><td>0.6</td></tr>\
             <tr><td>quality</td><td>0.4</td></tr>\
             </tbody></table>\
             <p></p>\
             <p>Best alternative: A2</p>"
        );
    }
}
