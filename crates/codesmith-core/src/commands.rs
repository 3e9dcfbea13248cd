//! Event Dispatch Layer
//!
//! The primary entry point of the engine: it maps abstract host events onto the
//! transformation modules and reports back whether the event was consumed.
//!
//! # Overview
//!
//! The host widget layer translates native input into two event classes and hands each one to
//! the engine together with a snapshot of the buffer and selection:
//!
//! - **Key events** ([`KeyEvent`]) feed the fixed-priority key dispatcher;
//! - **Content-changed events** ([`ContentChange`]) feed the snippet expander.
//!
//! A [`DispatchResult::Handled`] outcome carries the new buffer and selection; the host must
//! apply it and suppress its default action. [`DispatchResult::NotHandled`] means full
//! pass-through. Selections that violate the host contract are rejected with
//! [`EditError::InvalidRange`] before any transformation runs.
//!
//! # Example
//!
//! ```rust
//! use codesmith_core::{DispatchResult, EditorEngine, EditorState, EngineConfig, KeyEvent};
//!
//! let engine = EditorEngine::new(EngineConfig::default());
//! let state = EditorState::caret("ab", 1);
//!
//! match engine.handle_key_event(&KeyEvent::plain("("), &state, "js").unwrap() {
//!     DispatchResult::Handled(result) => {
//!         assert_eq!(result.text, "a()b");
//!         assert_eq!((result.selection_start, result.selection_end), (2, 2));
//!     }
//!     DispatchResult::NotHandled => unreachable!("pair keys are always handled"),
//! }
//! ```

use crate::autocomplete::{self, AutoCompleteRule};
use crate::blocks::{self, DuplicateDirection};
use crate::comment;
use crate::indent;
use crate::pairs::{self, PairKind};
use crate::text::char_len;
use codesmith_lang::CommentDelimiters;

/// An abstract key event, as translated by the host widget layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// Logical key name (`"Tab"`, `"Enter"`, `"ArrowUp"`, `"("`, ...).
    pub key: String,
    /// Ctrl modifier state.
    pub ctrl: bool,
    /// Shift modifier state.
    pub shift: bool,
    /// Alt modifier state.
    pub alt: bool,
}

impl KeyEvent {
    /// A key event without modifiers.
    pub fn plain(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ctrl: false,
            shift: false,
            alt: false,
        }
    }

    /// A key event with Ctrl held.
    pub fn ctrl(key: impl Into<String>) -> Self {
        Self {
            ctrl: true,
            ..Self::plain(key)
        }
    }

    /// A key event with Shift held.
    pub fn shift(key: impl Into<String>) -> Self {
        Self {
            shift: true,
            ..Self::plain(key)
        }
    }

    /// A key event with Alt held.
    pub fn alt(key: impl Into<String>) -> Self {
        Self {
            alt: true,
            ..Self::plain(key)
        }
    }

    /// A key event with Alt and Shift held.
    pub fn alt_shift(key: impl Into<String>) -> Self {
        Self {
            shift: true,
            ..Self::alt(key)
        }
    }
}

/// The origin of a content-changed event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Text was typed or pasted.
    Insert,
    /// Text was removed (backspace, delete, cut).
    Delete,
}

/// A content-changed notification from the host widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentChange {
    /// Whether the change inserted or removed text.
    pub kind: InputKind,
}

/// A host-side snapshot of the widget's buffer and selection.
///
/// Offsets are character offsets into `text`; `selection_start == selection_end` denotes a
/// caret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    /// Buffer content, with `'\n'` as the sole line separator.
    pub text: String,
    /// Selection start, in characters.
    pub selection_start: usize,
    /// Selection end, in characters.
    pub selection_end: usize,
}

impl EditorState {
    /// Create a state snapshot from a buffer and a selection range.
    pub fn new(text: impl Into<String>, selection_start: usize, selection_end: usize) -> Self {
        Self {
            text: text.into(),
            selection_start,
            selection_end,
        }
    }

    /// Create a state snapshot with a caret and no selection.
    pub fn caret(text: impl Into<String>, offset: usize) -> Self {
        Self::new(text, offset, offset)
    }

    /// Validate the selection against the buffer, returning `(start, end)`.
    ///
    /// A selection with `start > end` or `end` past the buffer length is a host contract
    /// violation and is rejected rather than repaired.
    pub fn validated_selection(&self) -> Result<(usize, usize), EditError> {
        let char_count = char_len(&self.text);
        if self.selection_start > self.selection_end || self.selection_end > char_count {
            return Err(EditError::InvalidRange {
                start: self.selection_start,
                end: self.selection_end,
                char_count,
            });
        }
        Ok((self.selection_start, self.selection_end))
    }
}

/// The result of a handled edit: the new buffer plus the new selection.
///
/// Every result satisfies `selection_start <= selection_end <= ` buffer length; the offsets
/// are derived from the lengths of the actually inserted and removed text, never from stale
/// pre-edit positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditResult {
    /// The new buffer content.
    pub text: String,
    /// New selection start, in characters.
    pub selection_start: usize,
    /// New selection end, in characters.
    pub selection_end: usize,
}

/// Outcome of dispatching one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchResult {
    /// The event was consumed; the host must apply the result and suppress its default
    /// action.
    Handled(EditResult),
    /// The event was not recognized; the host's default behavior applies untouched.
    NotHandled,
}

impl DispatchResult {
    /// The contained edit, if the event was handled.
    pub fn into_edit(self) -> Option<EditResult> {
        match self {
            DispatchResult::Handled(result) => Some(result),
            DispatchResult::NotHandled => None,
        }
    }
}

/// Dispatch error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// The host handed over a selection that does not satisfy
    /// `start <= end <= buffer length`.
    InvalidRange {
        /// Selection start, in characters.
        start: usize,
        /// Selection end, in characters.
        end: usize,
        /// Buffer length, in characters.
        char_count: usize,
    },
}

impl std::fmt::Display for EditError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditError::InvalidRange {
                start,
                end,
                char_count,
            } => {
                write!(
                    f,
                    "Invalid selection range: {}..{} in a buffer of {} characters",
                    start, end, char_count
                )
            }
        }
    }
}

impl std::error::Error for EditError {}

/// Per-instance engine configuration, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// The string inserted per indentation level.
    pub indent_unit: String,
    /// Default language tag, used when the host passes an empty live tag.
    pub lang: String,
    /// Ordered `short → full` snippet mapping; earlier entries win.
    pub auto_complete: Vec<(String, String)>,
}

impl Default for EngineConfig {
    /// JavaScript comments, four-space indent, no snippets.
    fn default() -> Self {
        Self {
            indent_unit: "    ".to_string(),
            lang: "js".to_string(),
            auto_complete: Vec::new(),
        }
    }
}

/// The editor engine: immutable per-instance configuration plus one entry point per event
/// class.
///
/// The engine is pure and stateless across calls. Concurrent engine instances are fully
/// independent; nothing here blocks, suspends, or touches shared state.
#[derive(Debug, Clone)]
pub struct EditorEngine {
    indent_unit: String,
    default_lang: String,
    rules: Vec<AutoCompleteRule>,
}

impl EditorEngine {
    /// Build an engine from its configuration. Snippet rules are derived once, here.
    pub fn new(config: EngineConfig) -> Self {
        let rules = autocomplete::build_rules(&config.auto_complete);
        Self {
            indent_unit: config.indent_unit,
            default_lang: config.lang,
            rules,
        }
    }

    /// The configured indent unit.
    pub fn indent_unit(&self) -> &str {
        &self.indent_unit
    }

    /// The language tag used when the host passes an empty live tag.
    pub fn default_lang(&self) -> &str {
        &self.default_lang
    }

    /// The prebuilt snippet rules, in priority order.
    pub fn rules(&self) -> &[AutoCompleteRule] {
        &self.rules
    }

    /// Dispatch one key event against the current host state.
    ///
    /// `lang` is the live language tag; it is consulted only by the comment toggle, so a
    /// runtime language change takes effect on the next toggle without rebuilding the engine.
    /// An empty tag falls back to the configured default.
    ///
    /// Priority order, first match consumes the event: Tab/Shift+Tab (indent/outdent),
    /// Alt+Shift+Up/Down (duplicate block), Alt+Up/Down (swap block), Ctrl+K (delete block),
    /// `(`/`{`/`"` (pair completion), Enter (pair-aware newline), Ctrl+`/` (comment toggle).
    pub fn handle_key_event(
        &self,
        event: &KeyEvent,
        state: &EditorState,
        lang: &str,
    ) -> Result<DispatchResult, EditError> {
        let (start, end) = state.validated_selection()?;
        let text = state.text.as_str();

        let result = match event.key.as_str() {
            "Tab" if event.shift => indent::outdent_selection(text, start, end),
            "Tab" => indent::indent_selection(text, start, end, &self.indent_unit),
            "ArrowUp" if event.alt && event.shift => {
                blocks::duplicate_block(text, start, end, DuplicateDirection::Up)
            }
            "ArrowDown" if event.alt && event.shift => {
                blocks::duplicate_block(text, start, end, DuplicateDirection::Down)
            }
            "ArrowUp" if event.alt => blocks::swap_block_up(text, start, end),
            "ArrowDown" if event.alt => blocks::swap_block_down(text, start, end),
            "k" | "K" if event.ctrl => blocks::delete_block(text, start, end),
            "(" => pairs::complete_pair(text, start, end, PairKind::Paren),
            "{" => pairs::complete_pair(text, start, end, PairKind::Brace),
            "\"" => pairs::complete_quote(text, start, end),
            "Enter" => pairs::insert_newline(text, start, end, &self.indent_unit),
            "/" if event.ctrl => {
                let tag = if lang.is_empty() {
                    self.default_lang.as_str()
                } else {
                    lang
                };
                comment::toggle_comment(text, start, end, &CommentDelimiters::for_tag(tag))
            }
            _ => return Ok(DispatchResult::NotHandled),
        };
        Ok(DispatchResult::Handled(result))
    }

    /// Dispatch one content-changed event; runs the snippet expander at the caret.
    ///
    /// Deletion-originated changes never expand. At most one rule fires per event.
    pub fn handle_content_changed(
        &self,
        change: &ContentChange,
        state: &EditorState,
    ) -> Result<DispatchResult, EditError> {
        let (caret, _) = state.validated_selection()?;
        match autocomplete::expand(&state.text, caret, &self.rules, change.kind) {
            Some(result) => Ok(DispatchResult::Handled(result)),
            None => Ok(DispatchResult::NotHandled),
        }
    }
}
