//! Single-pass scanner driving the table state machine.

use std::str::Lines;

use crate::block::{Block, Event, Line};
use crate::cells::{CellSplit, split_cells};

/// Whether the scanner is inside a table container.
///
/// | State      | Line        | Next       | Emitted first |
/// |------------|-------------|------------|---------------|
/// | `Scanning` | table line  | `InTable`  | `TableStart`  |
/// | `Scanning` | other line  | `Scanning` |               |
/// | `InTable`  | table line  | `InTable`  |               |
/// | `InTable`  | other line  | `Scanning` | `TableEnd`    |
/// | `InTable`  | end of text | `Scanning` | `TableEnd`    |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScanState {
    /// Outside any table.
    #[default]
    Scanning,
    /// A table container is open.
    InTable,
}

impl ScanState {
    /// Next state for a line, with the container boundary to emit before the
    /// line's own block.
    fn step(self, table_line: bool) -> (Self, Option<Event<'static>>) {
        match (self, table_line) {
            (Self::Scanning, true) => (Self::InTable, Some(Event::TableStart)),
            (Self::InTable, false) => (Self::Scanning, Some(Event::TableEnd)),
            (state, _) => (state, None),
        }
    }
}

/// Iterator over the [`Event`]s of a report body.
///
/// Lines end at `\n` or `\r\n`; a trailing terminator does not start a new
/// line, so `""` yields nothing and `"\n"` yields one empty paragraph.
pub struct Scanner<'a> {
    lines: Lines<'a>,
    state: ScanState,
    cell_split: CellSplit,
    /// Block held back while its boundary event is returned.
    pending: Option<Block<'a>>,
}

impl<'a> Scanner<'a> {
    /// Create a scanner over `text`.
    #[must_use]
    pub fn new(text: &'a str, cell_split: CellSplit) -> Self {
        Self {
            lines: text.lines(),
            state: ScanState::Scanning,
            cell_split,
            pending: None,
        }
    }

    /// Current state of the table machine.
    #[must_use]
    pub fn state(&self) -> ScanState {
        self.state
    }

    fn block(&self, line: Line<'a>) -> Option<Block<'a>> {
        match line {
            Line::Heading { level, text } => Some(Block::Heading { level, text }),
            Line::Separator => None,
            Line::Row(row) => Some(Block::TableRow(split_cells(row, self.cell_split))),
            Line::Text(text) => Some(Block::Paragraph(text)),
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Event<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(block) = self.pending.take() {
            return Some(Event::Block(block));
        }

        loop {
            let Some(text) = self.lines.next() else {
                let (state, boundary) = self.state.step(false);
                self.state = state;
                return boundary;
            };

            let line = Line::classify(text);
            let (state, boundary) = self.state.step(line.is_table());
            self.state = state;
            let block = self.block(line);

            match (boundary, block) {
                (Some(boundary), block) => {
                    self.pending = block;
                    return Some(boundary);
                }
                (None, Some(block)) => return Some(Event::Block(block)),
                // Separator inside an open table
                (None, None) => {}
            }
        }
    }
}
