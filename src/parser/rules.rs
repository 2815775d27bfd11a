//! Line rules.
//!
//! Predicates over a single trimmed line. The open-construct triggers
//! (fences, table rows) are plain functions; the accumulator rules form an
//! ordered table evaluated first-match-wins by [`classify_line`].

use super::ParseOptions;
use once_cell::sync::Lazy;
use regex::Regex;

/// Opening and bare closing fence token.
pub const FENCE: &str = "```";

static HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(#{1,6})\s(.*)$").expect("valid header pattern"));

static LIST_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[*+-]|(\d+)\.)\s(.*)$").expect("valid list item pattern"));

static DEFINITION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([^:]+):\s*(\S.*)$").expect("valid definition pattern"));

/// What an ordinary (non-fence, non-table) line means to the accumulator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// `#` heading, emitted on its own
    Header {
        /// Number of leading `#`
        level: u8,
        /// Text after the markers
        text: String,
    },
    /// List marker line, accumulated
    ListItem {
        /// `digit.` marker rather than a bullet
        ordered: bool,
    },
    /// `Label: value` line, emitted on its own
    Definition {
        /// Text before the first colon
        label: String,
        /// Text after the first colon
        value: String,
    },
    /// Whitespace-only line, flushes the accumulator
    Blank,
    /// Anything else, accumulated
    Text,
}

type Rule = fn(&str, &ParseOptions) -> Option<LineClass>;

/// Accumulator rules in priority order.
const RULES: &[(&str, Rule)] = &[
    ("header", header_rule),
    ("list", list_rule),
    ("definition", definition_rule),
    ("blank", blank_rule),
];

/// Classify a trimmed line against the accumulator rules.
pub fn classify_line(trimmed: &str, options: &ParseOptions) -> LineClass {
    RULES
        .iter()
        .find_map(|(_, rule)| rule(trimmed, options))
        .unwrap_or(LineClass::Text)
}

fn header_rule(trimmed: &str, _: &ParseOptions) -> Option<LineClass> {
    let caps = HEADER.captures(trimmed)?;
    Some(LineClass::Header {
        level: caps[1].len() as u8,
        text: caps[2].trim().to_string(),
    })
}

fn list_rule(trimmed: &str, _: &ParseOptions) -> Option<LineClass> {
    let caps = LIST_ITEM.captures(trimmed)?;
    Some(LineClass::ListItem {
        ordered: caps.get(1).is_some(),
    })
}

fn definition_rule(trimmed: &str, options: &ParseOptions) -> Option<LineClass> {
    if !options.definitions {
        return None;
    }
    let caps = DEFINITION.captures(trimmed)?;
    let value = caps[2].trim();
    if options.urls_as_text && value.starts_with("//") {
        return None;
    }
    Some(LineClass::Definition {
        label: caps[1].trim().to_string(),
        value: value.to_string(),
    })
}

fn blank_rule(trimmed: &str, _: &ParseOptions) -> Option<LineClass> {
    trimmed.is_empty().then_some(LineClass::Blank)
}

/// Whether a trimmed line opens a code fence.
pub fn is_fence(trimmed: &str) -> bool {
    trimmed.starts_with(FENCE)
}

/// Whether a trimmed line closes the fence opened by `fence`.
pub fn closes_fence(trimmed: &str, fence: &str) -> bool {
    trimmed == fence || trimmed == FENCE
}

/// Whether a trimmed line is a table-row candidate (two or more pipes).
pub fn is_table_row(trimmed: &str) -> bool {
    trimmed.matches('|').count() >= 2
}

/// Whether a trimmed line is a bare `a|b` row: exactly one pipe, strictly
/// inside the line.
pub fn is_single_pipe_row(trimmed: &str) -> bool {
    trimmed.matches('|').count() == 1 && !trimmed.starts_with('|') && !trimmed.ends_with('|')
}

/// Whether a bare `a|b` row may open a table above `next`.
///
/// Opening needs a separator on the next line and no colon, so that
/// `Label: a|b` stays a definition. Rows of an open table and separator
/// lines themselves only need [`is_single_pipe_row`].
pub fn opens_single_pipe_table(trimmed: &str, next: Option<&str>) -> bool {
    is_single_pipe_row(trimmed)
        && (is_separator_line(trimmed)
            || (!trimmed.contains(':') && next.is_some_and(is_separator_line)))
}

/// Whether a trimmed line is a header separator such as `--|--` or `|:---|`.
pub fn is_separator_line(trimmed: &str) -> bool {
    trimmed.contains('|')
        && trimmed.contains('-')
        && trimmed
            .chars()
            .all(|c| matches!(c, '-' | ':' | '|') || c.is_whitespace())
}

/// Whether a trimmed line carries a list marker.
pub fn is_list_item(trimmed: &str) -> bool {
    LIST_ITEM.is_match(trimmed)
}

/// Item text of a list marker line, or `None` if the line has no marker.
pub fn list_item_text(trimmed: &str) -> Option<String> {
    LIST_ITEM
        .captures(trimmed)
        .map(|caps| caps[2].trim().to_string())
}
