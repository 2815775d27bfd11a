//! Single-pass block classifier.

use super::rules::{self, LineClass};
use super::state::{Mode, ParserState};
use super::ParseOptions;
use crate::model::{split_lines, Block, Document, Line, Metadata};

/// Partitions a line stream into typed blocks.
///
/// The classifier itself holds only options; all scan state lives in a
/// [`ParserState`] created per call, so one classifier can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct BlockClassifier {
    options: ParseOptions,
}

impl BlockClassifier {
    /// Create a classifier with the given options.
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Options in use.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Classify `text` into blocks.
    pub fn classify(&self, text: &str) -> Vec<Block> {
        self.classify_document(text).to_blocks()
    }

    /// Classify `text`, keeping the source lines of every block.
    pub fn classify_document(&self, text: &str) -> Document {
        let lines = split_lines(text);
        let line_count = lines.len();

        let mut state = ParserState::new();
        let mut iter = lines.into_iter().peekable();
        while let Some(line) = iter.next() {
            let next = iter.peek().map(|next| next.trimmed());
            let step = self.plan(&state, &line, next);
            self.apply(&mut state, line, step);
        }

        let blocks = state.finish();
        log::debug!(
            "classified {} lines into {} blocks",
            line_count,
            blocks.len()
        );

        Document {
            metadata: Metadata {
                line_count,
                ..Default::default()
            },
            blocks,
        }
    }

    /// Decide what to do with `line` without touching the state.
    fn plan(&self, state: &ParserState, line: &Line, next: Option<&str>) -> Step {
        let trimmed = line.trimmed();

        if let Mode::CodeBlock { fence } = state.mode() {
            return if rules::closes_fence(trimmed, fence) {
                Step::CloseFence
            } else {
                Step::Code
            };
        }

        if rules::is_fence(trimmed) {
            return Step::OpenFence;
        }

        let table_row = rules::is_table_row(trimmed)
            || (state.in_table() && rules::is_single_pipe_row(trimmed))
            || rules::opens_single_pipe_table(trimmed, next);
        if table_row {
            return Step::TableRow;
        }

        if state.in_table() && trimmed.is_empty() {
            return Step::TableBlank;
        }

        Step::Line {
            close_table: state.in_table(),
            class: rules::classify_line(trimmed, &self.options),
        }
    }

    fn apply(&self, state: &mut ParserState, line: Line, step: Step) {
        match step {
            Step::Code => state.push_code_line(line),
            Step::CloseFence => state.close_code_fence(line),
            Step::OpenFence => state.open_code_fence(line),
            Step::TableRow => {
                if !state.in_table() {
                    state.open_table();
                }
                state.push_table_row(line);
            }
            Step::TableBlank => state.push_table_row(line),
            Step::Line { close_table, class } => {
                if close_table {
                    state.close_table();
                }
                match class {
                    LineClass::Header { level, text } => {
                        state.emit_standalone(Block::header(level, text), line)
                    }
                    LineClass::ListItem { .. } => state.accumulate_list_item(line),
                    LineClass::Definition { label, value } => {
                        state.emit_standalone(Block::definition(label, value), line)
                    }
                    LineClass::Blank => state.flush_accumulator(),
                    LineClass::Text => state.accumulate(line),
                }
            }
        }
    }
}

/// Transition chosen for one line.
#[derive(Debug)]
enum Step {
    Code,
    CloseFence,
    OpenFence,
    TableRow,
    TableBlank,
    Line { close_table: bool, class: LineClass },
}
