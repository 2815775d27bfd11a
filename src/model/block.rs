//! Block types produced by the classifier.

use super::{Line, TableLayout};
use serde::{Deserialize, Serialize};

/// One classified unit of document structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// `#`-prefixed heading
    Header {
        /// Heading rank (1-6)
        level: u8,
        /// Heading text without the markers
        text: String,
    },

    /// Plain text; multi-line paragraphs keep their source lines joined by `\n`
    Paragraph {
        /// Joined source lines
        text: String,
    },

    /// Bulleted or numbered list
    List {
        /// Whether the first item carried a `digit.` marker
        ordered: bool,
        /// Item texts with their markers removed
        items: Vec<String>,
    },

    /// Pipe table
    Table {
        /// Cells of the header row
        header_cells: Vec<String>,
        /// Body rows
        body_rows: Vec<Vec<String>>,
    },

    /// Fenced code, fence lines stripped
    CodeBlock {
        /// Verbatim code
        code: String,
    },

    /// `Label: value` line
    Definition {
        /// Text before the first colon
        label: String,
        /// Text after the first colon (may be empty)
        value: String,
    },
}

impl Block {
    /// Create a header block.
    pub fn header(level: u8, text: impl Into<String>) -> Self {
        Block::Header {
            level: level.clamp(1, 6),
            text: text.into(),
        }
    }

    /// Create a paragraph block.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph { text: text.into() }
    }

    /// Create a list block.
    pub fn list<I, S>(ordered: bool, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Block::List {
            ordered,
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a code block.
    pub fn code(code: impl Into<String>) -> Self {
        Block::CodeBlock { code: code.into() }
    }

    /// Create a definition block.
    pub fn definition(label: impl Into<String>, value: impl Into<String>) -> Self {
        Block::Definition {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Create a table block from an already computed layout.
    pub fn table(layout: TableLayout) -> Self {
        Block::Table {
            header_cells: layout.header_cells,
            body_rows: layout.body_rows,
        }
    }

    /// Short lowercase name of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Header { .. } => "header",
            Block::Paragraph { .. } => "paragraph",
            Block::List { .. } => "list",
            Block::Table { .. } => "table",
            Block::CodeBlock { .. } => "code_block",
            Block::Definition { .. } => "definition",
        }
    }
}

/// A block together with the non-blank source lines it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcedBlock {
    /// The classified block
    pub block: Block,

    /// Source lines owned by the block, fences included, blanks excluded
    pub lines: Vec<Line>,
}

impl SourcedBlock {
    /// Pair a block with its source lines.
    pub fn new(block: Block, lines: Vec<Line>) -> Self {
        Self { block, lines }
    }

    /// Index of the first source line, if any.
    pub fn first_line(&self) -> Option<usize> {
        self.lines.first().map(|line| line.index)
    }
}
