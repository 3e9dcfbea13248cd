#![warn(missing_docs)]
//! `codesmith-lang` - data-driven language configuration helpers for `codesmith-core`.
//!
//! This crate intentionally stays lightweight and does **not** depend on any parsing or
//! highlighting systems. It provides the small lookup tables hosts and the editor kernel use to
//! behave in a language-aware way.

/// Comment delimiters for a given language tag.
///
/// The editor kernel uses this to implement comment toggling in a UI-agnostic way. The table is
/// closed: `"html"` selects HTML comments, every other tag selects C-style block comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentDelimiters {
    /// Opening delimiter (e.g. `/*`).
    pub open: &'static str,
    /// Closing delimiter (e.g. `*/`).
    pub close: &'static str,
}

impl CommentDelimiters {
    /// C-style block comments (`/* ... */`), used by every non-HTML tag.
    pub const C_STYLE: Self = Self {
        open: "/*",
        close: "*/",
    };

    /// HTML comments (`<!-- ... -->`).
    pub const HTML: Self = Self {
        open: "<!--",
        close: "-->",
    };

    /// Select the delimiters for a language tag.
    ///
    /// `"html"` maps to [`CommentDelimiters::HTML`]; every other tag, including the empty
    /// string, maps to [`CommentDelimiters::C_STYLE`].
    pub fn for_tag(tag: &str) -> Self {
        if tag == "html" { Self::HTML } else { Self::C_STYLE }
    }

    /// Length of the opening delimiter in characters.
    pub fn open_len(&self) -> usize {
        self.open.chars().count()
    }

    /// Length of the closing delimiter in characters.
    pub fn close_len(&self) -> usize {
        self.close.chars().count()
    }
}

impl Default for CommentDelimiters {
    fn default() -> Self {
        Self::C_STYLE
    }
}
