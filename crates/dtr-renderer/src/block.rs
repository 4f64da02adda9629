//! Output blocks and line classification.

use std::sync::LazyLock;

use regex::Regex;

/// `## text` or `# text`. Two hashes win over one, and `### text` matches neither.
static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(#{1,2}) (.*)$").unwrap());

/// A classified, renderable unit of output.
///
/// Text is borrowed from the input document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block<'a> {
    /// `# text` (level 1) or `## text` (level 2).
    Heading {
        /// Heading level, 1 or 2.
        level: u8,
        /// Everything after the marker and its single space.
        text: &'a str,
    },
    /// One data row of a table, cells in left-to-right order.
    TableRow(Vec<&'a str>),
    /// Any other line, including blank ones.
    Paragraph(&'a str),
}

/// Item of the event stream produced by [`Scanner`](crate::Scanner).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event<'a> {
    /// Opens a table container.
    TableStart,
    /// Closes the open table container.
    TableEnd,
    /// A block in document order.
    Block(Block<'a>),
}

/// How a single input line is treated.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Line<'a> {
    Heading { level: u8, text: &'a str },
    /// Table line containing `---`; opens a table if needed but adds no row.
    Separator,
    /// Table line holding data; cells are split later.
    Row(&'a str),
    Text(&'a str),
}

impl<'a> Line<'a> {
    /// Classify a line. Headings are checked before table lines.
    pub(crate) fn classify(line: &'a str) -> Self {
        if let Some(caps) = HEADING_RE.captures(line) {
            #[allow(clippy::cast_possible_truncation)]
            let level = caps[1].len() as u8;
            let text = caps.get(2).map_or("", |m| m.as_str());
            return Self::Heading { level, text };
        }
        if line.starts_with('|') {
            if line.contains("---") {
                return Self::Separator;
            }
            return Self::Row(line);
        }
        Self::Text(line)
    }

    /// Whether the line belongs to a table region.
    pub(crate) fn is_table(&self) -> bool {
        matches!(self, Self::Separator | Self::Row(_))
    }
}
