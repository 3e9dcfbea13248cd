use criterion::{Criterion, black_box, criterion_group, criterion_main};

use codesmith_core::{
    ContentChange, EditorEngine, EditorState, EngineConfig, InputKind, KeyEvent,
};

fn large_text(line_count: usize) -> String {
    let mut out = String::with_capacity(line_count * 64);
    for i in 0..line_count {
        out.push_str(&format!(
            "{i:06} the quick brown fox jumps over the lazy dog (codesmith benchmark line)\n"
        ));
    }
    // Remove the final '\n' to avoid creating an extra trailing empty line.
    out.pop();
    out
}

fn bench_indent_full_selection(c: &mut Criterion) {
    let engine = EditorEngine::new(EngineConfig::default());
    let text = large_text(10_000);
    let total = text.chars().count();
    let state = EditorState::new(text, 0, total);

    c.bench_function("indent/10k_line_selection", |b| {
        b.iter(|| {
            let outcome = engine
                .handle_key_event(&KeyEvent::plain("Tab"), black_box(&state), "js")
                .unwrap();
            black_box(outcome);
        })
    });
}

fn bench_swap_block_middle(c: &mut Criterion) {
    let engine = EditorEngine::new(EngineConfig::default());
    let text = large_text(10_000);
    let caret = text.chars().count() / 2;
    let state = EditorState::caret(text, caret);

    c.bench_function("swap_block/10k_lines_middle", |b| {
        b.iter(|| {
            let outcome = engine
                .handle_key_event(&KeyEvent::alt("ArrowDown"), black_box(&state), "js")
                .unwrap();
            black_box(outcome);
        })
    });
}

fn bench_pair_key_middle(c: &mut Criterion) {
    let engine = EditorEngine::new(EngineConfig::default());
    let text = large_text(10_000);
    let caret = text.chars().count() / 2;
    let state = EditorState::caret(text, caret);

    c.bench_function("pair_completion/10k_lines_middle", |b| {
        b.iter(|| {
            let outcome = engine
                .handle_key_event(&KeyEvent::plain("("), black_box(&state), "js")
                .unwrap();
            black_box(outcome);
        })
    });
}

fn bench_snippet_scan_many_rules(c: &mut Criterion) {
    let mapping: Vec<(String, String)> = (0..100)
        .map(|i| (format!("short{i:03}"), format!("expansion_{i:03}()")))
        .collect();
    let engine = EditorEngine::new(EngineConfig {
        auto_complete: mapping,
        ..EngineConfig::default()
    });
    let text = format!("{}short099", large_text(1_000));
    let caret = text.chars().count();
    let state = EditorState::caret(text, caret);

    c.bench_function("snippet_expand/100_rules_last_match", |b| {
        b.iter(|| {
            let outcome = engine
                .handle_content_changed(
                    &ContentChange {
                        kind: InputKind::Insert,
                    },
                    black_box(&state),
                )
                .unwrap();
            black_box(outcome);
        })
    });
}

criterion_group!(
    benches,
    bench_indent_full_selection,
    bench_swap_block_middle,
    bench_pair_key_middle,
    bench_snippet_scan_many_rules
);
criterion_main!(benches);
