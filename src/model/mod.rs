//! Document model types.
//!
//! This module defines the block model that bridges classification and
//! rendering. A [`Block`] is immutable once emitted; the classifier keeps
//! the source [`Line`]s of every block alongside it in a [`SourcedBlock`].

mod block;
mod document;
mod line;
mod table;

pub use block::{Block, SourcedBlock};
pub use document::{Document, Metadata};
pub use line::{split_lines, Line};
pub use table::{is_separator_row, split_cells, TableLayout};
