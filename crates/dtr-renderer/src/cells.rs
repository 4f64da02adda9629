//! Splitting of pipe-delimited table rows into cells.

/// Policy for empty segments when splitting a row on `|`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CellSplit {
    /// Drop every empty or whitespace-only segment.
    ///
    /// Removes the framing pipes, but also collapses intentionally empty
    /// cells: `|A||B|` yields `A`, `B`. This is what existing reports expect.
    #[default]
    Lossy,
    /// Drop one empty segment at each end only.
    ///
    /// `|A||B|` yields `A`, ``, `B`.
    Preserve,
}

/// Split a table row into trimmed cells.
///
/// # Examples
///
/// ```
/// use dtr_renderer::{CellSplit, split_cells};
///
/// assert_eq!(split_cells("| a | b |", CellSplit::Lossy), ["a", "b"]);
/// assert_eq!(split_cells("|a||b|", CellSplit::Preserve), ["a", "", "b"]);
/// ```
pub fn split_cells(line: &str, mode: CellSplit) -> Vec<&str> {
    match mode {
        CellSplit::Lossy => line
            .split('|')
            .map(str::trim)
            .filter(|cell| !cell.is_empty())
            .collect(),
        CellSplit::Preserve => {
            let mut cells: Vec<&str> = line.split('|').map(str::trim).collect();
            if cells.first().is_some_and(|cell| cell.is_empty()) {
                cells.remove(0);
            }
            if cells.last().is_some_and(|cell| cell.is_empty()) {
                cells.pop();
            }
            cells
        }
    }
}
