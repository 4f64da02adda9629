//! HTML output for report events.

use std::borrow::Cow;
use std::fmt::Write;

use crate::block::{Block, Event};

/// Escape `& < > " '` for use in HTML text and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Accumulates markup for a stream of events.
pub(crate) struct HtmlWriter {
    out: String,
    escape: bool,
}

impl HtmlWriter {
    pub(crate) fn new(capacity: usize, escape: bool) -> Self {
        Self {
            out: String::with_capacity(capacity),
            escape,
        }
    }

    fn text<'t>(&self, text: &'t str) -> Cow<'t, str> {
        if self.escape {
            Cow::Owned(escape_html(text))
        } else {
            Cow::Borrowed(text)
        }
    }

    pub(crate) fn event(&mut self, event: &Event<'_>) {
        match event {
            Event::TableStart => self.out.push_str("<table><tbody>"),
            Event::TableEnd => self.out.push_str("</tbody></table>"),
            Event::Block(block) => self.block(block),
        }
    }

    fn block(&mut self, block: &Block<'_>) {
        match block {
            Block::Heading { level, text } => {
                let text = self.text(text);
                write!(self.out, "<h{level}>{text}</h{level}>").unwrap();
            }
            Block::TableRow(cells) => {
                self.out.push_str("<tr>");
                for cell in cells {
                    let cell = self.text(cell);
                    write!(self.out, "<td>{cell}</td>").unwrap();
                }
                self.out.push_str("</tr>");
            }
            Block::Paragraph(text) => {
                let text = self.text(text);
                write!(self.out, "<p>{text}</p>").unwrap();
            }
        }
    }

    pub(crate) fn finish(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(events: &[Event<'_>], escape: bool) -> String {
        let mut writer = HtmlWriter::new(0, escape);
        for event in events {
            writer.event(event);
        }
        writer.finish()
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#x27;Jerry&#x27;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_html_plain_text_unchanged() {
        assert_eq!(escape_html("Alternative A1: 0.42"), "Alternative A1: 0.42");
    }

    #[test]
    fn test_heading_levels() {
        let events = [
            Event::Block(Block::Heading {
                level: 1,
                text: "One",
            }),
            Event::Block(Block::Heading {
                level: 2,
                text: "Two",
            }),
        ];
        assert_eq!(write(&events, false), "<h1>One</h1><h2>Two</h2>");
    }

    #[test]
    fn test_table_markup() {
        let events = [
            Event::TableStart,
            Event::Block(Block::TableRow(vec!["a", "b"])),
            Event::TableEnd,
        ];
        assert_eq!(
            write(&events, false),
            "<table><tbody><tr><td>a</td><td>b</td></tr></tbody></table>"
        );
    }

    #[test]
    fn test_empty_row() {
        let events = [Event::Block(Block::TableRow(Vec::new()))];
        assert_eq!(write(&events, false), "<tr></tr>");
    }

    #[test]
    fn test_verbatim_without_escaping() {
        let events = [Event::Block(Block::Paragraph("<b>x</b>"))];
        assert_eq!(write(&events, false), "<p><b>x</b></p>");
    }

    #[test]
    fn test_escaping_applies_to_all_text() {
        let events = [
            Event::Block(Block::Heading {
                level: 1,
                text: "<h>",
            }),
            Event::Block(Block::TableRow(vec!["a&b"])),
            Event::Block(Block::Paragraph("<script>")),
        ];
        assert_eq!(
            write(&events, true),
            "<h1>&lt;h&gt;</h1><tr><td>a&amp;b</td></tr><p>&lt;script&gt;</p>"
        );
    }
}
