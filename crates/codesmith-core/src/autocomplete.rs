//! Short-code (snippet) expansion.
//!
//! A configured `short` found immediately before the caret is replaced by its `full` text
//! after every inserting edit. Deletion-originated changes never expand, so backspacing
//! through a trigger does not re-fire it.

use crate::commands::{EditResult, InputKind};
use crate::text::{char_len, slice};

/// One snippet rule derived from a `short → full` mapping entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoCompleteRule {
    /// The trigger text looked up immediately before the caret.
    pub short: String,
    /// The replacement text.
    pub full: String,
    /// Caret adjustment relative to the end of `full`: `-1` places the caret inside a
    /// trailing `()`/`{}` pair, `0` right after the replacement.
    pub caret_offset: isize,
}

impl AutoCompleteRule {
    /// Build a rule, deriving the caret offset from the replacement's trailing characters.
    pub fn new(short: impl Into<String>, full: impl Into<String>) -> Self {
        let short = short.into();
        let full = full.into();
        let caret_offset = if full.ends_with("()") || full.ends_with("{}") {
            -1
        } else {
            0
        };
        Self {
            short,
            full,
            caret_offset,
        }
    }
}

/// Build the rule list from an ordered `short → full` mapping.
///
/// Definition order is preserved; [`expand`] applies the first matching rule only, so earlier
/// entries shadow later ones whose `short` is a suffix of theirs.
pub fn build_rules<S, F>(mapping: &[(S, F)]) -> Vec<AutoCompleteRule>
where
    S: AsRef<str>,
    F: AsRef<str>,
{
    mapping
        .iter()
        .map(|(short, full)| AutoCompleteRule::new(short.as_ref(), full.as_ref()))
        .collect()
}

/// Try to expand a snippet ending at the caret.
///
/// Returns `None` when the change was a deletion or no rule matches; at most one rule fires.
pub fn expand(
    text: &str,
    pos: usize,
    rules: &[AutoCompleteRule],
    kind: InputKind,
) -> Option<EditResult> {
    if kind == InputKind::Delete {
        return None;
    }

    let total = char_len(text);
    for rule in rules {
        let short_len = char_len(&rule.short);
        if pos < short_len {
            continue;
        }
        let trigger_start = pos - short_len;
        if slice(text, trigger_start, pos) != rule.short {
            continue;
        }

        let before = slice(text, 0, trigger_start);
        let after = slice(text, pos, total);
        let caret = (trigger_start + char_len(&rule.full)).saturating_add_signed(rule.caret_offset);
        return Some(EditResult {
            text: format!("{before}{}{after}", rule.full),
            selection_start: caret,
            selection_end: caret,
        });
    }
    None
}
