use codesmith_core::{EditorEngine, EditorState, EngineConfig, KeyEvent};

fn main() {
    let engine = EditorEngine::new(EngineConfig::default());

    // Toggle a comment around the line under the caret.
    let state = EditorState::caret("let total = price * count;", 4);
    let wrapped = engine
        .handle_key_event(&KeyEvent::ctrl("/"), &state, "js")
        .unwrap()
        .into_edit()
        .expect("comment toggle is always handled");

    assert_eq!(wrapped.text, "/*let total = price * count;*/");

    // Toggling again strips the delimiters back off.
    let state = EditorState::new(
        wrapped.text,
        wrapped.selection_start,
        wrapped.selection_end,
    );
    let unwrapped = engine
        .handle_key_event(&KeyEvent::ctrl("/"), &state, "js")
        .unwrap()
        .into_edit()
        .expect("comment toggle is always handled");

    assert_eq!(unwrapped.text, "let total = price * count;");
    println!("round-tripped: {}", unwrapped.text);
}
