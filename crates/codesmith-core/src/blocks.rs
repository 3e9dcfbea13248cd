//! Line-block reordering, duplication, and deletion.
//!
//! All operations act on the line block covered by the current selection (the maximal run of
//! whole lines it touches, trailing newline included). Moving or duplicating a block at the
//! buffer end, where no trailing newline exists, never fabricates one: line contents are
//! reordered while the buffer keeps its newline count and trailing-newline presence.

use crate::commands::EditResult;
use crate::line_index::{line_block_range, line_end_after, line_start_before};
use crate::text::{char_len, slice};

/// Which copy of a duplicated block holds the selection afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateDirection {
    /// Select the first copy.
    Up,
    /// Select the second copy.
    Down,
}

/// Swap the selection's line block with the single line above it.
///
/// The first block of the buffer cannot move; the buffer and selection come back unchanged.
/// Otherwise the selection keeps its in-block offsets relative to the block's new position.
pub fn swap_block_up(text: &str, start: usize, end: usize) -> EditResult {
    let block = line_block_range(text, start, end);
    if block.start == 0 {
        return unchanged(text, start, end);
    }

    let total = char_len(text);
    // The '\n' at block.start - 1 terminates the line above.
    let prev_start = line_start_before(text, block.start - 1);
    let before = slice(text, 0, prev_start);
    let prev_content = slice(text, prev_start, block.start - 1);
    let block_text = slice(text, block.start, block.end);
    let after = slice(text, block.end, total);

    let (block_content, block_had_newline) = split_trailing_newline(block_text);

    let mut buffer = String::with_capacity(text.len());
    buffer.push_str(before);
    buffer.push_str(block_content);
    buffer.push('\n');
    buffer.push_str(prev_content);
    if block_had_newline {
        buffer.push('\n');
    }
    buffer.push_str(after);

    EditResult {
        text: buffer,
        selection_start: prev_start + (start - block.start),
        selection_end: prev_start + (end - block.start),
    }
}

/// Swap the selection's line block with the single line below it.
///
/// A block already reaching the buffer end cannot move; the buffer and selection come back
/// unchanged. Otherwise the selection shifts forward past the swapped-in line.
pub fn swap_block_down(text: &str, start: usize, end: usize) -> EditResult {
    let block = line_block_range(text, start, end);
    let total = char_len(text);
    if block.end >= total {
        return unchanged(text, start, end);
    }

    // block.end < total means the block carries its own trailing '\n'.
    let next_end = line_end_after(text, block.end);
    let next_had_newline = next_end < total;
    let before = slice(text, 0, block.start);
    let block_text = slice(text, block.start, block.end);
    let next_content = slice(text, block.end, next_end);
    let after = if next_had_newline {
        slice(text, next_end + 1, total)
    } else {
        ""
    };

    let (block_content, _) = split_trailing_newline(block_text);

    let mut buffer = String::with_capacity(text.len());
    buffer.push_str(before);
    buffer.push_str(next_content);
    buffer.push('\n');
    buffer.push_str(block_content);
    if next_had_newline {
        buffer.push('\n');
    }
    buffer.push_str(after);

    let shift = char_len(next_content) + 1;
    EditResult {
        text: buffer,
        selection_start: start + shift,
        selection_end: end + shift,
    }
}

/// Insert a second copy of the selection's line block directly after it.
///
/// Duplication is unconditional. A final block without a trailing newline gets exactly one
/// separating `'\n'` between the copies and the buffer still ends without one. The selection
/// moves to cover the whole first copy (`Up`) or the whole second copy (`Down`).
pub fn duplicate_block(
    text: &str,
    start: usize,
    end: usize,
    direction: DuplicateDirection,
) -> EditResult {
    let block = line_block_range(text, start, end);
    let total = char_len(text);
    let before = slice(text, 0, block.start);
    let block_text = slice(text, block.start, block.end);
    let after = slice(text, block.end, total);

    let needs_separator = !block_text.is_empty() && !block_text.ends_with('\n');
    let separator = if needs_separator { "\n" } else { "" };

    let mut buffer = String::with_capacity(text.len() + block_text.len() + 1);
    buffer.push_str(before);
    buffer.push_str(block_text);
    buffer.push_str(separator);
    buffer.push_str(block_text);
    buffer.push_str(after);

    let block_len = block.len();
    let (selection_start, selection_end) = match direction {
        DuplicateDirection::Up => (block.start, block.start + block_len),
        DuplicateDirection::Down => {
            let second = block.start + block_len + char_len(separator);
            (second, second + block_len)
        }
    };
    EditResult {
        text: buffer,
        selection_start,
        selection_end,
    }
}

/// Delete the selection's line block together with its trailing newline.
///
/// When the block is the buffer's last line (no trailing `'\n'`), the preceding newline is
/// absorbed instead so no blank line is left behind. The caret collapses to the deletion
/// point.
pub fn delete_block(text: &str, start: usize, end: usize) -> EditResult {
    let total = char_len(text);
    let mut delete_start = line_start_before(text, start);
    let mut delete_end = line_end_after(text, end);

    if delete_end < total {
        delete_end += 1;
    } else if delete_start > 0 {
        // delete_start > 0 implies the previous character is the '\n' ending the line above.
        delete_start -= 1;
    }

    let before = slice(text, 0, delete_start);
    let after = slice(text, delete_end, total);
    EditResult {
        text: format!("{before}{after}"),
        selection_start: delete_start,
        selection_end: delete_start,
    }
}

fn unchanged(text: &str, start: usize, end: usize) -> EditResult {
    EditResult {
        text: text.to_string(),
        selection_start: start,
        selection_end: end,
    }
}

fn split_trailing_newline(block: &str) -> (&str, bool) {
    match block.strip_suffix('\n') {
        Some(content) => (content, true),
        None => (block, false),
    }
}
