//! Document-level types.

use super::{Block, SourcedBlock};
use crate::detect::FileKind;
use serde::{Deserialize, Serialize};

/// A classified document: its blocks in source order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Document metadata
    pub metadata: Metadata,

    /// Blocks with their source lines
    pub blocks: Vec<SourcedBlock>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a block to the document.
    pub fn add_block(&mut self, block: SourcedBlock) {
        self.blocks.push(block);
    }

    /// Number of blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the document has any blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterate over the bare blocks.
    pub fn iter_blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter().map(|sourced| &sourced.block)
    }

    /// Clone out the bare blocks.
    pub fn to_blocks(&self) -> Vec<Block> {
        self.iter_blocks().cloned().collect()
    }

    /// Non-blank source lines of all blocks, in block order.
    pub fn source_lines(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .flat_map(|sourced| sourced.lines.iter().map(|line| line.text.as_str()))
            .collect()
    }
}

/// Document metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    /// Attachment filename, if known
    pub filename: Option<String>,

    /// Detected content kind, if known
    pub kind: Option<FileKind>,

    /// Number of input lines after line-ending normalisation
    pub line_count: usize,
}

impl Metadata {
    /// Create metadata for a named attachment.
    pub fn with_filename(filename: impl Into<String>) -> Self {
        Self {
            filename: Some(filename.into()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Line;

    #[test]
    fn test_document_new() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.block_count(), 0);
    }

    #[test]
    fn test_source_lines_in_order() {
        let mut doc = Document::new();
        doc.add_block(SourcedBlock::new(
            Block::header(1, "A"),
            vec![Line::new(0, "# A")],
        ));
        doc.add_block(SourcedBlock::new(
            Block::paragraph("b\nc"),
            vec![Line::new(2, "b"), Line::new(3, "c")],
        ));
        assert_eq!(doc.source_lines(), vec!["# A", "b", "c"]);
        assert_eq!(doc.to_blocks().len(), 2);
    }

    #[test]
    fn test_metadata_with_filename() {
        let metadata = Metadata::with_filename("notes.md");
        assert_eq!(metadata.filename.as_deref(), Some("notes.md"));
        assert!(metadata.kind.is_none());
    }
}
