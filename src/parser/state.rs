//! Classifier state machine.
//!
//! [`ParserState`] owns the pending lines of whatever construct is open and
//! the blocks emitted so far. Every transition is a named method so the
//! flush points of the scan are explicit.

use super::rules;
use crate::model::{Block, Line, SourcedBlock, TableLayout};

/// Which multi-line construct is open.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    /// Paragraph/list accumulation
    #[default]
    None,
    /// Inside a fenced code block; `fence` is the exact opening token
    CodeBlock {
        /// Trimmed opening fence line
        fence: String,
    },
    /// Inside a pipe table
    Table,
}

/// State of one classification pass.
///
/// Created fresh for every document and consumed by [`ParserState::finish`].
#[derive(Debug, Default)]
pub struct ParserState {
    mode: Mode,
    pending: Vec<Line>,
    blocks: Vec<SourcedBlock>,
}

impl ParserState {
    /// Create an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The open construct.
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Whether a table is open.
    pub fn in_table(&self) -> bool {
        self.mode == Mode::Table
    }

    /// Lines waiting to become a block.
    pub fn pending(&self) -> &[Line] {
        &self.pending
    }

    /// Blocks emitted so far.
    pub fn blocks(&self) -> &[SourcedBlock] {
        &self.blocks
    }

    /// Whether the accumulator holds a list, i.e. its first line is a list item.
    pub fn accumulator_is_list(&self) -> bool {
        self.pending
            .first()
            .is_some_and(|line| rules::is_list_item(line.trimmed()))
    }

    /// Append a line to the paragraph/list accumulator.
    pub fn accumulate(&mut self, line: Line) {
        debug_assert_eq!(self.mode, Mode::None);
        self.pending.push(line);
    }

    /// Append a list item, flushing first if the accumulator holds non-list text.
    pub fn accumulate_list_item(&mut self, line: Line) {
        if !self.pending.is_empty() && !self.accumulator_is_list() {
            self.flush_accumulator();
        }
        self.accumulate(line);
    }

    /// Emit a block that stands alone (header, definition) after flushing.
    pub fn emit_standalone(&mut self, block: Block, line: Line) {
        self.flush_accumulator();
        self.emit(block, vec![line]);
    }

    /// Turn the accumulator into a `List` or `Paragraph` block.
    ///
    /// A block is a list as soon as its first line is a list item. Later
    /// lines without a marker are kept as source but produce no item.
    pub fn flush_accumulator(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let lines = std::mem::take(&mut self.pending);

        let block = match lines.first().map(|line| line.trimmed()) {
            Some(first) if rules::is_list_item(first) => {
                let ordered = first.starts_with(|c: char| c.is_ascii_digit());
                let items = lines
                    .iter()
                    .filter_map(|line| rules::list_item_text(line.trimmed()));
                Block::list(ordered, items)
            }
            _ => Block::paragraph(
                lines
                    .iter()
                    .map(|line| line.text.as_str())
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
        };

        self.emit(block, lines);
    }

    /// Open a code fence on `line`, closing whatever was open before.
    pub fn open_code_fence(&mut self, line: Line) {
        match self.mode {
            Mode::Table => self.close_table(),
            Mode::None => self.flush_accumulator(),
            Mode::CodeBlock { .. } => self.close_unterminated_fence(),
        }
        self.mode = Mode::CodeBlock {
            fence: line.trimmed().to_string(),
        };
        self.pending.push(line);
    }

    /// Append a verbatim line to the open code block.
    pub fn push_code_line(&mut self, line: Line) {
        self.pending.push(line);
    }

    /// Close the open code block on its closing fence `line`.
    pub fn close_code_fence(&mut self, line: Line) {
        self.pending.push(line);
        let lines = std::mem::take(&mut self.pending);
        let body = &lines[1..lines.len() - 1];
        let code = join_text(body);
        self.mode = Mode::None;
        self.emit(Block::code(code), lines);
    }

    /// Flush a code block whose closing fence never came: every line after
    /// the opening fence is code.
    fn close_unterminated_fence(&mut self) {
        let lines = std::mem::take(&mut self.pending);
        let code = join_text(lines.get(1..).unwrap_or_default());
        self.mode = Mode::None;
        self.emit(Block::code(code), lines);
    }

    /// Start a table, flushing the accumulator first.
    pub fn open_table(&mut self) {
        self.flush_accumulator();
        self.mode = Mode::Table;
    }

    /// Append a row (or a tolerated blank line) to the open table.
    pub fn push_table_row(&mut self, line: Line) {
        debug_assert_eq!(self.mode, Mode::Table);
        self.pending.push(line);
    }

    /// Close the open table and emit it.
    pub fn close_table(&mut self) {
        let lines = std::mem::take(&mut self.pending);
        let layout = TableLayout::from_lines(lines.iter().map(|line| line.text.as_str()));
        self.mode = Mode::None;
        self.emit(Block::table(layout), lines);
    }

    /// End of input: flush whatever is still open and return the blocks.
    pub fn finish(mut self) -> Vec<SourcedBlock> {
        match self.mode {
            Mode::Table => self.close_table(),
            Mode::CodeBlock { .. } => self.close_unterminated_fence(),
            Mode::None => self.flush_accumulator(),
        }
        self.blocks
    }

    fn emit(&mut self, block: Block, lines: Vec<Line>) {
        let lines = lines.into_iter().filter(|line| !line.is_blank()).collect();
        let sourced = SourcedBlock::new(block, lines);
        log::trace!(
            "emit {} from line {:?}",
            sourced.block.kind(),
            sourced.first_line()
        );
        self.blocks.push(sourced);
    }
}

fn join_text(lines: &[Line]) -> String {
    lines
        .iter()
        .map(|line| line.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(index: usize, text: &str) -> Line {
        Line::new(index, text)
    }

    #[test]
    fn test_flush_accumulator_paragraph() {
        let mut state = ParserState::new();
        state.accumulate(line(0, "first"));
        state.accumulate(line(1, "second"));
        state.flush_accumulator();

        assert!(state.pending().is_empty());
        assert_eq!(state.blocks()[0].block, Block::paragraph("first\nsecond"));
    }

    #[test]
    fn test_flush_accumulator_list_drops_unmarked_lines() {
        let mut state = ParserState::new();
        state.accumulate_list_item(line(0, "- one"));
        state.accumulate(line(1, "stray"));
        state.accumulate_list_item(line(2, "- two"));
        state.flush_accumulator();

        let sourced = &state.blocks()[0];
        assert_eq!(sourced.block, Block::list(false, ["one", "two"]));
        assert_eq!(sourced.lines.len(), 3);
    }

    #[test]
    fn test_list_item_flushes_paragraph() {
        let mut state = ParserState::new();
        state.accumulate(line(0, "intro"));
        state.accumulate_list_item(line(1, "1. one"));
        let blocks = state.finish();

        assert_eq!(blocks[0].block, Block::paragraph("intro"));
        assert_eq!(blocks[1].block, Block::list(true, ["one"]));
    }

    #[test]
    fn test_code_fence_round() {
        let mut state = ParserState::new();
        state.open_code_fence(line(0, "```rust"));
        assert_eq!(
            state.mode(),
            &Mode::CodeBlock {
                fence: "```rust".into()
            }
        );
        state.push_code_line(line(1, "let x = 1;"));
        state.close_code_fence(line(2, "```"));

        assert_eq!(state.mode(), &Mode::None);
        assert_eq!(state.blocks()[0].block, Block::code("let x = 1;"));
        assert_eq!(state.blocks()[0].lines.len(), 3);
    }

    #[test]
    fn test_unterminated_fence_flushes_as_code() {
        let mut state = ParserState::new();
        state.open_code_fence(line(0, "```"));
        state.push_code_line(line(1, "a"));
        state.push_code_line(line(2, "b"));
        let blocks = state.finish();

        assert_eq!(blocks[0].block, Block::code("a\nb"));
    }

    #[test]
    fn test_close_table_keeps_blank_out_of_source() {
        let mut state = ParserState::new();
        state.accumulate(line(0, "before"));
        state.open_table();
        state.push_table_row(line(1, "| a | b |"));
        state.push_table_row(line(2, ""));
        state.close_table();

        assert_eq!(state.blocks().len(), 2);
        let table = &state.blocks()[1];
        assert_eq!(
            table.block,
            Block::Table {
                header_cells: vec!["a".into(), "b".into()],
                body_rows: vec![],
            }
        );
        assert_eq!(table.lines.len(), 1);
    }

    #[test]
    fn test_open_fence_closes_table() {
        let mut state = ParserState::new();
        state.open_table();
        state.push_table_row(line(0, "a|b|c"));
        state.open_code_fence(line(1, "```"));

        assert!(matches!(state.blocks()[0].block, Block::Table { .. }));
        assert!(matches!(state.mode(), Mode::CodeBlock { .. }));
    }
}
