//! Block classification.
//!
//! A single forward scan over the lines of a document. Fenced code and pipe
//! tables are open constructs that own every line until they close; all
//! other lines go through the ordered rules in [`rules`] and either emit a
//! block immediately (headers, definitions) or feed the paragraph/list
//! accumulator.

mod classifier;
mod options;
pub mod rules;
pub mod state;

pub use classifier::BlockClassifier;
pub use options::ParseOptions;
pub use state::{Mode, ParserState};

use crate::model::{Block, Document};

/// Classify `text` into blocks with default options.
///
/// Never fails: content that matches no rule becomes a paragraph.
pub fn classify(text: &str) -> Vec<Block> {
    BlockClassifier::default().classify(text)
}

/// Classify `text` into blocks with custom options.
pub fn classify_with_options(text: &str, options: &ParseOptions) -> Vec<Block> {
    BlockClassifier::new(options.clone()).classify(text)
}

/// Classify `text`, keeping the source lines of every block.
pub fn classify_document(text: &str, options: &ParseOptions) -> Document {
    BlockClassifier::new(options.clone()).classify_document(text)
}
