//! Indentation management.
//!
//! Applies or removes one indent unit across the lines intersected by a selection, and computes
//! the indent prefix of the current line. Outdenting strips up to four leading spaces per line
//! regardless of the configured indent unit width, and never strips tabs.

use crate::commands::EditResult;
use crate::line_index::{line_end_after, line_start_before};
use crate::text::{char_len, slice};
use regex::{NoExpand, Regex};
use std::sync::LazyLock;

static INDENT_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\t ]*").expect("valid literal pattern"));
static LINE_HEAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^").expect("valid literal pattern"));
static OUTDENT_HEAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^ {1,4}").expect("valid literal pattern"));

/// The leading run of tab/space characters on the line containing `pos`.
///
/// The run is read from the text between the line start and `pos`, so a caret placed inside
/// the whitespace run sees only the part to its left.
pub fn current_line_indent(text: &str, pos: usize) -> String {
    let line_start = line_start_before(text, pos);
    let head = slice(text, line_start, pos);
    INDENT_PREFIX
        .find(head)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Insert one indent unit at the caret, or at the start of every line intersected by the
/// selection.
///
/// With a caret, the unit is inserted in place and the caret advances past it. With a
/// selection, every line the selection touches gains the unit (a line holding only the
/// selection end at its first column counts), the selection start shifts by one unit and the
/// selection end by one unit per affected line.
pub fn indent_selection(text: &str, start: usize, end: usize, unit: &str) -> EditResult {
    let total = char_len(text);
    let unit_len = char_len(unit);

    if start == end {
        let before = slice(text, 0, start);
        let after = slice(text, start, total);
        let caret = start + unit_len;
        return EditResult {
            text: format!("{before}{unit}{after}"),
            selection_start: caret,
            selection_end: caret,
        };
    }

    let block_start = line_start_before(text, start);
    let block_end = line_end_after(text, end);
    let before = slice(text, 0, block_start);
    let block = slice(text, block_start, block_end);
    let after = slice(text, block_end, total);

    let line_count = block.split('\n').count();
    let modified = LINE_HEAD.replace_all(block, NoExpand(unit));

    EditResult {
        text: format!("{before}{modified}{after}"),
        selection_start: start + unit_len,
        selection_end: end + unit_len * line_count,
    }
}

/// Strip up to four leading spaces from every line intersected by the selection.
///
/// The four-column policy is fixed and independent of the configured indent unit; tabs are
/// left alone. The returned selection covers exactly the modified block.
pub fn outdent_selection(text: &str, start: usize, end: usize) -> EditResult {
    let total = char_len(text);
    let block_start = line_start_before(text, start);
    let block_end = line_end_after(text, end);
    let before = slice(text, 0, block_start);
    let block = slice(text, block_start, block_end);
    let after = slice(text, block_end, total);

    let modified = OUTDENT_HEAD.replace_all(block, "");
    let modified_len = char_len(&modified);

    EditResult {
        text: format!("{before}{modified}{after}"),
        selection_start: block_start,
        selection_end: block_start + modified_len,
    }
}
