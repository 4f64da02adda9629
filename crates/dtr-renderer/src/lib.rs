//! Line-based renderer for run report bodies.
//!
//! Run reports are written in a small markdown subset: level 1 and level 2
//! headings, pipe-delimited tables, and plain text lines. This crate turns
//! that subset into HTML in a single forward pass and provides
//! [`ReportWriter`] for producing it.
//!
//! # Architecture
//!
//! - [`Scanner`]: classifies each line and drives the two-state table machine,
//!   yielding [`Event`]s in document order
//! - [`ReportRenderer`]: writes the event stream as HTML, optionally escaping text
//! - [`ReportWriter`]: builds report bodies in the same subset
//!
//! Rendering never fails: any input produces some output, in the worst case a
//! sequence of paragraphs.
//!
//! # Example
//!
//! ```
//! use dtr_renderer::{CellSplit, ReportRenderer, render};
//!
//! assert_eq!(render("## Result"), "<h2>Result</h2>");
//!
//! let html = ReportRenderer::new()
//!     .with_escaping(true)
//!     .with_cell_split(CellSplit::Preserve)
//!     .render("|a||b|");
//! assert_eq!(html, "<table><tbody><tr><td>a</td><td></td><td>b</td></tr></tbody></table>");
//! ```

mod block;
mod cells;
mod html;
mod renderer;
mod scanner;
mod writer;

pub use block::{Block, Event};
pub use cells::{CellSplit, split_cells};
pub use html::escape_html;
pub use renderer::ReportRenderer;
pub use scanner::{ScanState, Scanner};
pub use writer::ReportWriter;

/// Render a report body with the default options.
///
/// Text is emitted verbatim and empty cells are dropped. Use
/// [`ReportRenderer`] to enable escaping or keep empty cells.
#[must_use]
pub fn render(text: &str) -> String {
    ReportRenderer::new().render(text)
}
