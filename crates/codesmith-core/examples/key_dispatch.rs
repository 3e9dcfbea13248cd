use codesmith_core::{DispatchResult, EditorEngine, EditorState, EngineConfig, KeyEvent};

fn main() {
    let engine = EditorEngine::new(EngineConfig {
        indent_unit: "  ".to_string(),
        ..EngineConfig::default()
    });

    // Type "{", press Enter inside the pair, then indent the new line once more.
    let mut state = EditorState::caret("fn main() ", 10);
    for event in [
        KeyEvent::plain("{"),
        KeyEvent::plain("Enter"),
        KeyEvent::plain("Tab"),
    ] {
        match engine.handle_key_event(&event, &state, "js").unwrap() {
            DispatchResult::Handled(result) => {
                state = EditorState::new(result.text, result.selection_start, result.selection_end);
            }
            DispatchResult::NotHandled => println!("{:?} passed through", event),
        }
    }

    assert_eq!(state.text, "fn main() {\n    \n}");
    println!("{}", state.text);
    println!(
        "caret at {} (column {})",
        state.selection_start,
        state.selection_start - state.text.rfind('\n').map_or(0, |i| i + 1)
    );
}
