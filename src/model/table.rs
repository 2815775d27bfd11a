//! Table row splitting and header/body layout.

use once_cell::sync::Lazy;
use regex::Regex;

static SEPARATOR_CELL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-:|\s]+$").expect("valid separator pattern"));

/// Split one table line into trimmed cells.
///
/// Only the empty cells produced by a leading or trailing pipe are dropped;
/// empty cells in the middle of a row are kept.
pub fn split_cells(line: &str) -> Vec<String> {
    let trimmed = line.trim();
    let inner = trimmed.strip_prefix('|').unwrap_or(trimmed);
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    inner.split('|').map(|cell| cell.trim().to_string()).collect()
}

/// Whether a row consists only of `-`, `:`, `|` and whitespace cells.
pub fn is_separator_row(cells: &[String]) -> bool {
    !cells.is_empty() && cells.iter().all(|cell| SEPARATOR_CELL.is_match(cell))
}

/// Header and body rows derived from the lines of a table block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableLayout {
    /// Cells of the first row
    pub header_cells: Vec<String>,

    /// Every row after the header (separator removed)
    pub body_rows: Vec<Vec<String>>,
}

impl TableLayout {
    /// Lay out the retained lines of a table.
    ///
    /// Blank lines are ignored. The first row becomes the header; a second
    /// row made only of separator cells is removed. A table without a
    /// separator is not rejected, row 1 is still the header.
    pub fn from_lines<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut rows: Vec<Vec<String>> = lines
            .into_iter()
            .filter(|line| !line.trim().is_empty())
            .map(split_cells)
            .collect();

        if rows.len() > 1 && is_separator_row(&rows[1]) {
            rows.remove(1);
        }

        let mut rows = rows.into_iter();
        Self {
            header_cells: rows.next().unwrap_or_default(),
            body_rows: rows.collect(),
        }
    }

    /// Whether there is nothing to render.
    pub fn is_empty(&self) -> bool {
        self.header_cells.is_empty() && self.body_rows.is_empty()
    }
}
