//! Rendering result with statistics.

use crate::model::Block;
use serde::{Deserialize, Serialize};

/// Result of rendering blocks, including the HTML and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered HTML
    pub html: String,

    /// Rendering statistics
    pub stats: RenderStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(html: String, stats: RenderStats) -> Self {
        Self { html, stats }
    }
}

/// Statistics collected while rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Number of headers
    pub header_count: u32,

    /// Number of paragraphs
    pub paragraph_count: u32,

    /// Number of lists
    pub list_count: u32,

    /// Number of list items across all lists
    pub list_item_count: u32,

    /// Number of tables
    pub table_count: u32,

    /// Number of code blocks
    pub code_block_count: u32,

    /// Number of definitions
    pub definition_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one block and the text it carries.
    pub fn record(&mut self, block: &Block) {
        match block {
            Block::Header { text, .. } => {
                self.header_count += 1;
                self.count_text(text);
            }
            Block::Paragraph { text } => {
                self.paragraph_count += 1;
                self.count_text(text);
            }
            Block::List { items, .. } => {
                self.list_count += 1;
                self.list_item_count += items.len() as u32;
                items.iter().for_each(|item| self.count_text(item));
            }
            Block::Table {
                header_cells,
                body_rows,
            } => {
                self.table_count += 1;
                header_cells
                    .iter()
                    .chain(body_rows.iter().flatten())
                    .for_each(|cell| self.count_text(cell));
            }
            Block::CodeBlock { code } => {
                self.code_block_count += 1;
                self.count_text(code);
            }
            Block::Definition { label, value } => {
                self.definition_count += 1;
                self.count_text(label);
                self.count_text(value);
            }
        }
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }

    /// Total number of blocks counted.
    pub fn block_count(&self) -> u32 {
        self.header_count
            + self.paragraph_count
            + self.list_count
            + self.table_count
            + self.code_block_count
            + self.definition_count
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_count_text() {
        let mut stats = RenderStats::new();
        stats.count_text("Hello, world! This is a test.");

        assert_eq!(stats.word_count, 6);
        assert_eq!(stats.char_count, 24);
    }

    #[test]
    fn test_stats_record_blocks() {
        let mut stats = RenderStats::new();
        stats.record(&Block::header(1, "Title"));
        stats.record(&Block::list(false, ["a", "b", "c"]));
        stats.record(&Block::definition("Key", "value here"));

        assert_eq!(stats.header_count, 1);
        assert_eq!(stats.list_item_count, 3);
        assert_eq!(stats.definition_count, 1);
        assert_eq!(stats.block_count(), 3);
        assert_eq!(stats.word_count, 7);
    }
}
