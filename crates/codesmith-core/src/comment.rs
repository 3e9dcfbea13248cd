//! Comment wrapping and unwrapping.
//!
//! The delimiters are an explicit argument rather than captured state, so a live language
//! change on the host side takes effect on the very next toggle.

use crate::commands::EditResult;
use crate::line_index::{line_end_after, line_start_before};
use crate::text::{char_len, slice};
use codesmith_lang::CommentDelimiters;

/// Toggle comment delimiters around the selection.
///
/// Classification, checked in order:
/// 1. the text immediately before the selection equals `open` and the text immediately after
///    equals `close` - both delimiters are stripped;
/// 2. a caret on an empty line - an adjacent `open`+`close` pair is inserted with the caret
///    between the delimiters;
/// 3. a caret on a non-empty line - the selection is promoted to the full line, then wrapped;
/// 4. anything else - the selection is wrapped in `open`/`close`.
///
/// In every case the returned selection covers exactly the enclosed text, so toggling twice
/// with the same delimiters restores the original buffer and selection.
pub fn toggle_comment(
    text: &str,
    start: usize,
    end: usize,
    delims: &CommentDelimiters,
) -> EditResult {
    let total = char_len(text);
    let before = slice(text, 0, start);
    let selected = slice(text, start, end);
    let after = slice(text, end, total);

    if before.ends_with(delims.open) && after.starts_with(delims.close) {
        let new_start = start - delims.open_len();
        let kept_before = slice(text, 0, new_start);
        let kept_after = slice(text, end + delims.close_len(), total);
        return EditResult {
            text: format!("{kept_before}{selected}{kept_after}"),
            selection_start: new_start,
            selection_end: new_start + char_len(selected),
        };
    }

    if start == end {
        let line_start = line_start_before(text, start);
        let line_end = line_end_after(text, start);

        if line_start == line_end {
            let caret = start + delims.open_len();
            return EditResult {
                text: format!("{before}{}{}{after}", delims.open, delims.close),
                selection_start: caret,
                selection_end: caret,
            };
        }

        return wrap(text, line_start, line_end, delims);
    }

    wrap(text, start, end, delims)
}

fn wrap(text: &str, start: usize, end: usize, delims: &CommentDelimiters) -> EditResult {
    let total = char_len(text);
    let before = slice(text, 0, start);
    let selected = slice(text, start, end);
    let after = slice(text, end, total);
    let selection_start = start + delims.open_len();
    EditResult {
        text: format!("{before}{}{selected}{}{after}", delims.open, delims.close),
        selection_start,
        selection_end: selection_start + char_len(selected),
    }
}
