#![warn(missing_docs)]
//! Codesmith Core - Headless Textarea-Enhancement Engine
//!
//! # Overview
//!
//! `codesmith-core` is the editor kernel beneath a textarea-enhancement widget. Given a plain
//! text buffer, a selection range, and an abstract input event, it computes the new buffer and
//! the new selection. It never touches a rendering surface: the host widget layer reads its
//! state, hands a snapshot to the engine, and applies the returned edit.
//!
//! # Core Features
//!
//! - **Indentation Management**: indent/outdent across multi-line selections, indent-aware
//!   newline insertion
//! - **Line-Block Editing**: swap, duplicate, and delete the run of whole lines under the
//!   selection
//! - **Pair Completion**: bracket/brace/quote pairing with caret placement and
//!   selection wrapping
//! - **Comment Toggling**: idempotent wrap/unwrap with per-language delimiters
//! - **Snippet Expansion**: first-match short-code substitution at the caret
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Event Dispatch (EditorEngine)              │  ← Public API
//! ├──────────┬──────────┬───────────┬───────────┤
//! │  Indent  │  Blocks  │  Pairs    │  Comment  │  ← Transformations
//! ├──────────┴──────────┴───────────┴───────────┤
//! │  Snippet Expansion (content-changed path)   │
//! ├─────────────────────────────────────────────┤
//! │  Line Index (boundary & block queries)      │  ← Line Access
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use codesmith_core::{DispatchResult, EditorEngine, EditorState, EngineConfig, KeyEvent};
//!
//! let engine = EditorEngine::new(EngineConfig {
//!     indent_unit: "  ".to_string(),
//!     ..EngineConfig::default()
//! });
//!
//! // Press Enter between an empty brace pair.
//! let state = EditorState::caret("if () {}", 7);
//! let result = engine
//!     .handle_key_event(&KeyEvent::plain("Enter"), &state, "js")
//!     .unwrap()
//!     .into_edit()
//!     .expect("Enter is always handled");
//!
//! assert_eq!(result.text, "if () {\n  \n}");
//! assert_eq!(result.selection_start, 10);
//! ```
//!
//! # Module Description
//!
//! - [`commands`] - event types, engine configuration, and the fixed-priority dispatcher
//! - [`line_index`] - line boundary and line-block queries
//! - [`indent`] - indent/outdent and indent-prefix computation
//! - [`blocks`] - line-block swap, duplication, and deletion
//! - [`pairs`] - bracket/brace/quote completion and pair-aware newlines
//! - [`comment`] - comment delimiter wrapping and unwrapping
//! - [`autocomplete`] - short-code expansion rules and matching
//!
//! # Offsets & Purity
//!
//! All offsets are character offsets (Unicode scalar values), never bytes; `'\n'` is the sole
//! line separator and no trailing-newline normalization is applied. Every operation is a pure,
//! terminating function of its inputs: the engine holds only immutable per-instance
//! configuration and is safe to share across fully independent editor instances.

pub mod autocomplete;
pub mod blocks;
pub mod comment;
pub mod commands;
pub mod indent;
pub mod line_index;
pub mod pairs;
mod text;

pub use autocomplete::AutoCompleteRule;
pub use blocks::DuplicateDirection;
pub use codesmith_lang::CommentDelimiters;
pub use commands::{
    ContentChange, DispatchResult, EditError, EditResult, EditorEngine, EditorState,
    EngineConfig, InputKind, KeyEvent,
};
pub use line_index::LineBlock;
pub use pairs::PairKind;
