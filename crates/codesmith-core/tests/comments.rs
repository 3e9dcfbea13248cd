use codesmith_core::{EditResult, EditorEngine, EditorState, EngineConfig, KeyEvent};

fn engine() -> EditorEngine {
    EditorEngine::new(EngineConfig::default())
}

fn toggle(engine: &EditorEngine, text: &str, start: usize, end: usize, lang: &str) -> EditResult {
    engine
        .handle_key_event(&KeyEvent::ctrl("/"), &EditorState::new(text, start, end), lang)
        .unwrap()
        .into_edit()
        .expect("comment toggle is always handled")
}

#[test]
fn test_toggle_on_empty_line_inserts_adjacent_pair() {
    let result = toggle(&engine(), "", 0, 0, "js");

    assert_eq!(result.text, "/**/");
    assert_eq!((result.selection_start, result.selection_end), (2, 2));
}

#[test]
fn test_toggle_promotes_caret_to_full_line() {
    let result = toggle(&engine(), "let x;", 3, 3, "js");

    assert_eq!(result.text, "/*let x;*/");
    assert_eq!((result.selection_start, result.selection_end), (2, 8));
}

#[test]
fn test_toggle_wraps_selection() {
    let result = toggle(&engine(), "abc def", 0, 3, "js");

    assert_eq!(result.text, "/*abc*/ def");
    assert_eq!((result.selection_start, result.selection_end), (2, 5));
}

#[test]
fn test_toggle_unwraps_wrapped_selection() {
    let result = toggle(&engine(), "/*abc*/ def", 2, 5, "js");

    assert_eq!(result.text, "abc def");
    assert_eq!((result.selection_start, result.selection_end), (0, 3));
}

#[test]
fn test_toggle_twice_restores_buffer_and_selection() {
    let engine = engine();
    let original = "hello world";

    let wrapped = toggle(&engine, original, 0, 5, "js");
    assert_eq!(wrapped.text, "/*hello*/ world");

    let unwrapped = toggle(
        &engine,
        &wrapped.text,
        wrapped.selection_start,
        wrapped.selection_end,
        "js",
    );
    assert_eq!(unwrapped.text, original);
    assert_eq!((unwrapped.selection_start, unwrapped.selection_end), (0, 5));
}

#[test]
fn test_toggle_promotes_line_under_caret_only() {
    let result = toggle(&engine(), "a\nbb\nc", 3, 3, "js");

    assert_eq!(result.text, "a\n/*bb*/\nc");
    assert_eq!((result.selection_start, result.selection_end), (4, 6));
}

#[test]
fn test_html_tag_uses_html_delimiters() {
    let result = toggle(&engine(), "<p>", 0, 3, "html");

    assert_eq!(result.text, "<!--<p>-->");
    assert_eq!((result.selection_start, result.selection_end), (4, 7));
}

#[test]
fn test_language_tag_is_read_per_call() {
    // One engine, two calls with different live tags: the delimiter choice follows the tag
    // passed at toggle time, not construction-time state.
    let engine = engine();

    let js = toggle(&engine, "x", 0, 1, "js");
    assert_eq!(js.text, "/*x*/");

    let html = toggle(&engine, "x", 0, 1, "html");
    assert_eq!(html.text, "<!--x-->");
}

#[test]
fn test_empty_tag_falls_back_to_configured_default() {
    let engine = EditorEngine::new(EngineConfig {
        lang: "html".to_string(),
        ..EngineConfig::default()
    });

    let result = toggle(&engine, "x", 0, 1, "");
    assert_eq!(result.text, "<!--x-->");
}

#[test]
fn test_unwrap_requires_both_delimiters_adjacent() {
    // Only the opening delimiter precedes the selection, so this wraps instead of stripping.
    let result = toggle(&engine(), "/*abc", 2, 5, "js");

    assert_eq!(result.text, "/*/*abc*/");
    assert_eq!((result.selection_start, result.selection_end), (4, 7));
}

#[test]
fn test_promoted_line_keeps_leading_whitespace_inside() {
    let result = toggle(&engine(), "  x\ny", 2, 2, "js");

    assert_eq!(result.text, "/*  x*/\ny");
    assert_eq!((result.selection_start, result.selection_end), (2, 5));
}
