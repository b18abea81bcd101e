//! Benchmarks for frame composition
//!
//! Run with: cargo bench rendering

use std::time::Instant;

use crate_edit::config::EditorConfig;
use crate_edit::model::{AppModel, Cursor, Document, DEFAULT_TAB_STOP};
use crate_edit::view::render_frame;

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn model(lines: usize, rows: usize, cols: usize) -> AppModel {
    let content = "fn main() {\n\tprintln!(\"hello\");\n}\n".repeat(lines / 3 + 1);
    let doc = Document::from_bytes(content.as_bytes(), DEFAULT_TAB_STOP);
    AppModel::new(doc, rows, cols, EditorConfig::default())
}

#[divan::bench(args = [80, 200, 300])]
fn full_frame(bencher: divan::Bencher, cols: usize) {
    let mut model = model(10_000, 50, cols);
    model.scroll();
    let now = Instant::now();
    bencher.bench(|| render_frame(divan::black_box(&model), now));
}

#[divan::bench]
fn frame_scrolled_to_middle(bencher: divan::Bencher) {
    let mut model = model(10_000, 50, 200);
    model.editor.cursor = Cursor::at(0, 5_000);
    model.scroll();
    let now = Instant::now();
    bencher.bench(|| render_frame(divan::black_box(&model), now));
}

#[divan::bench]
fn welcome_frame(bencher: divan::Bencher) {
    let mut model = AppModel::new(Document::new(), 50, 200, EditorConfig::default());
    model.scroll();
    let now = Instant::now();
    bencher.bench(|| render_frame(divan::black_box(&model), now));
}

#[divan::bench]
fn scroll_recompute(bencher: divan::Bencher) {
    let mut model = model(10_000, 50, 200);
    model.editor.cursor = Cursor::at(1, 5_000);
    bencher.bench_local(|| model.scroll());
}
