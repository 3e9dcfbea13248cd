//! Bracket, brace, and quote pair completion, plus pair-aware newline insertion.

use crate::commands::EditResult;
use crate::indent::current_line_indent;
use crate::text::{char_len, slice};

/// The bracket pairs completed on keypress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairKind {
    /// `(` completed to `()`.
    Paren,
    /// `{` completed to `{}`.
    Brace,
}

impl PairKind {
    fn pair(self) -> &'static str {
        match self {
            PairKind::Paren => "()",
            PairKind::Brace => "{}",
        }
    }
}

/// Insert an empty bracket pair at the caret, placing the caret between the halves.
///
/// Any existing selection is replaced, mirroring plain insert-at-caret semantics.
pub fn complete_pair(text: &str, start: usize, end: usize, kind: PairKind) -> EditResult {
    let total = char_len(text);
    let before = slice(text, 0, start);
    let after = slice(text, end, total);
    let caret = start + 1;
    EditResult {
        text: format!("{before}{}{after}", kind.pair()),
        selection_start: caret,
        selection_end: caret,
    }
}

/// Double-quote completion: insert `""` at a caret, or wrap a selection in quotes.
///
/// When wrapping, the new selection covers exactly the original text, shifted past the
/// opening quote.
pub fn complete_quote(text: &str, start: usize, end: usize) -> EditResult {
    let total = char_len(text);
    let before = slice(text, 0, start);
    let selected = slice(text, start, end);
    let after = slice(text, end, total);

    if start == end {
        let caret = start + 1;
        return EditResult {
            text: format!("{before}\"\"{after}"),
            selection_start: caret,
            selection_end: caret,
        };
    }

    EditResult {
        text: format!("{before}\"{selected}\"{after}"),
        selection_start: start + 1,
        selection_end: start + 1 + char_len(selected),
    }
}

/// Enter handling.
///
/// When the characters around the caret form an empty `{}` or `()` pair, a blank line indented
/// one unit deeper is opened between them and the closing half moves to its own line at the
/// current depth, with the caret at the end of the blank line. Otherwise a newline plus the
/// current line's indent prefix is inserted and the caret lands after the indent.
pub fn insert_newline(text: &str, start: usize, end: usize, unit: &str) -> EditResult {
    let total = char_len(text);
    let before = slice(text, 0, start);
    let after = slice(text, end, total);
    let indent = current_line_indent(text, start);

    let prev = before.chars().last();
    let next = after.chars().next();
    let between_pair = matches!(
        (prev, next),
        (Some('{'), Some('}')) | (Some('('), Some(')'))
    );

    if between_pair {
        let inner = format!("{indent}{unit}");
        let caret = start + 1 + char_len(&inner);
        return EditResult {
            text: format!("{before}\n{inner}\n{indent}{after}"),
            selection_start: caret,
            selection_end: caret,
        };
    }

    let caret = start + 1 + char_len(&indent);
    EditResult {
        text: format!("{before}\n{indent}{after}"),
        selection_start: caret,
        selection_end: caret,
    }
}
