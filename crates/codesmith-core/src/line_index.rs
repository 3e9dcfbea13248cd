//! Line boundary and line-block queries.
//!
//! Everything in this module is a pure query over an immutable buffer. Offsets are character
//! offsets (Unicode scalar values), `'\n'` is the only recognized line separator, and no
//! trailing-newline normalization is assumed or enforced.

use crate::text::char_len;

/// The maximal run of whole lines touched by a selection.
///
/// `start` is the first column of the line containing the selection start. `end` extends past
/// the line containing the selection end, including its terminating `'\n'` when one exists, so
/// a relocated block carries its own trailing newline. The final block of a buffer without a
/// trailing newline has none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineBlock {
    /// First character offset of the block.
    pub start: usize,
    /// One past the last character of the block (after the trailing `'\n'`, if any).
    pub end: usize,
}

impl LineBlock {
    /// Block length in characters.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` when the block covers no characters (a caret on an empty final line).
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Offset of the first character of the line containing `pos`.
///
/// That is the character right after the nearest `'\n'` at or before `pos - 1`, or `0` when no
/// newline precedes `pos`.
pub fn line_start_before(text: &str, pos: usize) -> usize {
    let mut start = 0;
    for (i, ch) in text.chars().take(pos).enumerate() {
        if ch == '\n' {
            start = i + 1;
        }
    }
    start
}

/// Offset of the `'\n'` terminating the line containing `pos`, or the buffer length when the
/// line is the last one.
pub fn line_end_after(text: &str, pos: usize) -> usize {
    for (i, ch) in text.chars().enumerate().skip(pos) {
        if ch == '\n' {
            return i;
        }
    }
    char_len(text)
}

/// Compute the [`LineBlock`] covered by the selection `[start, end]`.
pub fn line_block_range(text: &str, start: usize, end: usize) -> LineBlock {
    let block_start = line_start_before(text, start);
    let line_end = line_end_after(text, end);
    let block_end = if line_end < char_len(text) {
        line_end + 1
    } else {
        line_end
    };
    LineBlock {
        start: block_start,
        end: block_end,
    }
}
