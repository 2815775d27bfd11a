//! Source line type.

use serde::{Deserialize, Serialize};

/// One line of input: raw text without its terminator, plus its 0-based
/// position in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// Position in the document (0-based)
    pub index: usize,

    /// Raw text, no trailing newline
    pub text: String,
}

impl Line {
    /// Create a new line.
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }

    /// Text with surrounding whitespace removed.
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    /// Whether the line holds only whitespace.
    pub fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }
}

/// Split a document into lines after normalising `\r\n` and lone `\r`
/// terminators to `\n`.
pub fn split_lines(text: &str) -> Vec<Line> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    normalized
        .split('\n')
        .enumerate()
        .map(|(index, text)| Line::new(index, text))
        .collect()
}
