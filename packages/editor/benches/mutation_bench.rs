use collage_editor::{Catalog, Editor, Forest, Mutation, PropValue};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn wide_forest(blocks: usize) -> (Catalog, Forest) {
    let catalog = Catalog::builtin();
    let mut editor = Editor::new(catalog.clone());
    let tags = ["heading", "paragraph", "image", "button", "spacer"];
    for i in 0..blocks {
        editor.add(tags[i % tags.len()]);
    }
    (catalog, editor.forest().clone())
}

fn apply_set_property(c: &mut Criterion) {
    let (catalog, forest) = wide_forest(100);
    let id = forest.nodes()[50].id.clone();
    let mutation = Mutation::SetProperty {
        node_id: id,
        key: "text".to_string(),
        value: PropValue::from("benchmarked"),
    };

    c.bench_function("set_property_100_blocks", |b| {
        b.iter(|| mutation.apply(black_box(&forest), &catalog))
    });
}

fn apply_reorder(c: &mut Criterion) {
    let (catalog, forest) = wide_forest(100);
    let mutation = Mutation::Reorder {
        source_id: forest.nodes()[99].id.clone(),
        target_id: forest.nodes()[0].id.clone(),
    };

    c.bench_function("reorder_100_blocks", |b| {
        b.iter(|| mutation.apply(black_box(&forest), &catalog))
    });
}

fn commit_with_history(c: &mut Criterion) {
    let tags = ["heading", "paragraph", "image", "button", "spacer"];

    c.bench_function("commit_burst_50", |b| {
        b.iter(|| {
            let mut editor = Editor::new(Catalog::builtin());
            for i in 0..50 {
                editor.add(black_box(tags[i % tags.len()]));
            }
            editor
        })
    });
}

fn export_import_round_trip(c: &mut Criterion) {
    let (catalog, forest) = wide_forest(100);
    let mut editor = Editor::with_forest(catalog, forest);
    let json = editor.export();

    c.bench_function("import_100_blocks", |b| {
        b.iter(|| editor.import(black_box(&json)))
    });
}

criterion_group!(
    benches,
    apply_set_property,
    apply_reorder,
    commit_with_history,
    export_import_round_trip
);
criterion_main!(benches);
