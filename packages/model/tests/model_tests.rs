//! Model-level integration: traversal depth and codec fidelity
//!
//! Exercises the public surface the way the editor does: documents with
//! real nesting, lookups at every depth, and serialized round trips.

use collage_catalog::Catalog;
use collage_model::{export, import, instantiate, instantiate_default, Forest, NodeId, Props};

/// Sections nested `depth` levels deep, a paragraph at the bottom.
fn nested(catalog: &Catalog, depth: usize) -> (Forest, Vec<NodeId>) {
    let mut ids = Vec::new();

    let mut node = instantiate_default(catalog, "paragraph").unwrap();
    ids.push(node.id.clone());
    for _ in 0..depth {
        let mut outer = instantiate_default(catalog, "section").unwrap();
        ids.push(outer.id.clone());
        outer.push_child(node);
        node = outer;
    }
    ids.reverse();

    (Forest::from(vec![node]), ids)
}

#[test]
fn test_find_resolves_every_depth() {
    let catalog = Catalog::builtin();
    let (forest, ids) = nested(&catalog, 5);

    assert_eq!(forest.len(), 1);
    assert_eq!(forest.total_len(), 6);
    for id in &ids {
        assert!(forest.find(id).is_some(), "{id} did not resolve");
    }

    // The innermost node really is the paragraph.
    let deepest = ids.last().unwrap();
    assert_eq!(forest.find(deepest).unwrap().kind, "paragraph");
    assert!(forest.find(&NodeId::from("nowhere")).is_none());
}

#[test]
fn test_round_trip_preserves_deep_nesting() {
    let catalog = Catalog::builtin();
    let (forest, ids) = nested(&catalog, 4);

    let back = import(&export(&forest)).unwrap();
    assert_eq!(back, forest);
    for id in &ids {
        assert!(back.find(id).is_some());
    }
}

#[test]
fn test_round_trip_preserves_root_order() {
    let catalog = Catalog::builtin();
    let forest: Forest = ["heading", "image", "button", "spacer", "paragraph"]
        .iter()
        .map(|tag| instantiate_default(&catalog, tag).unwrap())
        .collect();

    let back = import(&export(&forest)).unwrap();
    let kinds: Vec<&str> = back.iter().map(|node| node.kind.as_str()).collect();
    assert_eq!(kinds, ["heading", "image", "button", "spacer", "paragraph"]);
}

#[test]
fn test_overridden_props_survive_the_wire() {
    let catalog = Catalog::builtin();
    let node = instantiate(
        &catalog,
        "heading",
        Props::from([
            ("text".to_string(), "Quarterly report".into()),
            ("level".to_string(), 1.into()),
        ]),
    )
    .unwrap();
    let id = node.id.clone();
    let forest = Forest::from(vec![node]);

    let back = import(&export(&forest)).unwrap();
    let heading = back.find(&id).unwrap();
    assert_eq!(
        heading.props.get("text").and_then(|value| value.as_text()),
        Some("Quarterly report")
    );
    assert_eq!(
        heading.props.get("level").and_then(|value| value.as_number()),
        Some(1.0)
    );
}

#[test]
fn test_exported_ids_are_stable() {
    let catalog = Catalog::builtin();
    let forest = Forest::from(vec![instantiate_default(&catalog, "button").unwrap()]);

    // Serialization stamps nothing; the same forest exports the same
    // bytes every time.
    assert_eq!(export(&forest), export(&forest));

    let back = import(&export(&forest)).unwrap();
    assert_eq!(back.nodes()[0].id, forest.nodes()[0].id);
}

#[test]
fn test_foreign_documents_round_trip_unchanged() {
    // Documents written by other tools keep whatever the catalog does
    // not understand: unknown types, readable ids.
    let source = r#"[
  { "id": "intro", "type": "heading", "props": { "text": "Hi", "level": 1, "align": "left" } },
  { "id": "widget-9", "type": "countdown", "props": { "seconds": 30 } }
]"#;

    let forest = import(source).unwrap();
    assert_eq!(forest.len(), 2);

    let back = import(&export(&forest)).unwrap();
    assert_eq!(back, forest);
    assert_eq!(back.nodes()[1].kind, "countdown");
}
