//! Built-in starter documents.
//!
//! Templates are built by instantiating catalog types at load time, so
//! every load stamps fresh identifiers; loading the same template twice
//! never produces colliding ids.

use collage_catalog::{Catalog, PropValue};
use collage_model::{instantiate, Forest, Node, Props};

/// Names accepted by [`forest`], in palette order.
pub fn names() -> &'static [&'static str] {
    &["blank", "landing", "article"]
}

/// Build the named template against `catalog`.
///
/// Unknown names yield `None`, as does a catalog missing any type the
/// template uses.
pub fn forest(name: &str, catalog: &Catalog) -> Option<Forest> {
    match name {
        "blank" => Some(Forest::new()),
        "landing" => landing(catalog),
        "article" => article(catalog),
        _ => None,
    }
}

fn props<const N: usize>(entries: [(&str, PropValue); N]) -> Props {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

fn block(catalog: &Catalog, tag: &str, overrides: Props) -> Option<Node> {
    instantiate(catalog, tag, overrides).ok()
}

fn landing(catalog: &Catalog) -> Option<Forest> {
    let mut hero = block(
        catalog,
        "section",
        props([("background", "#f4f1ff".into()), ("padding", 64.into())]),
    )?;
    hero.push_child(block(
        catalog,
        "heading",
        props([
            ("text", "Build pages visually".into()),
            ("level", 1.into()),
            ("align", "center".into()),
        ]),
    )?);
    hero.push_child(block(
        catalog,
        "paragraph",
        props([
            (
                "text",
                "Drop blocks onto the canvas, tweak their properties, and publish when it feels right."
                    .into(),
            ),
            ("size", 18.into()),
        ]),
    )?);
    hero.push_child(block(
        catalog,
        "button",
        props([("label", "Get started".into()), ("href", "#start".into())]),
    )?);

    let gap = block(catalog, "spacer", props([("height", 48.into())]))?;

    let mut features = block(catalog, "section", props([]))?;
    features.push_child(block(
        catalog,
        "heading",
        props([("text", "Why Collage".into()), ("level", 2.into())]),
    )?);
    features.push_child(block(
        catalog,
        "paragraph",
        props([(
            "text",
            "Six block types cover most marketing pages; everything else is a property away."
                .into(),
        )]),
    )?);

    Some(Forest::from(vec![hero, gap, features]))
}

fn article(catalog: &Catalog) -> Option<Forest> {
    let title = block(
        catalog,
        "heading",
        props([("text", "Untitled article".into()), ("level", 1.into())]),
    )?;
    let lede = block(
        catalog,
        "paragraph",
        props([
            ("text", "Start with a strong opening paragraph.".into()),
            ("size", 18.into()),
        ]),
    )?;
    let figure = block(
        catalog,
        "image",
        props([("alt", "Cover image".into()), ("width", 80.into())]),
    )?;
    let body = block(catalog, "paragraph", props([]))?;
    let gap = block(catalog, "spacer", props([("height", 24.into())]))?;

    Some(Forest::from(vec![title, lede, figure, body, gap]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_name_builds() {
        let catalog = Catalog::builtin();
        for name in names() {
            assert!(forest(name, &catalog).is_some(), "template {name} failed");
        }
    }

    #[test]
    fn test_blank_is_empty() {
        let catalog = Catalog::builtin();
        assert!(forest("blank", &catalog).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_name_yields_nothing() {
        let catalog = Catalog::builtin();
        assert!(forest("portfolio", &catalog).is_none());
    }

    #[test]
    fn test_landing_structure() {
        let catalog = Catalog::builtin();
        let landing = forest("landing", &catalog).unwrap();

        assert_eq!(landing.len(), 3);
        let hero = &landing.nodes()[0];
        assert_eq!(hero.kind, "section");
        assert_eq!(hero.children.as_ref().map(Vec::len), Some(3));
    }

    #[test]
    fn test_templates_only_use_declared_keys() {
        let catalog = Catalog::builtin();

        fn check(node: &Node, catalog: &Catalog) {
            let descriptor = catalog
                .get(&node.kind)
                .unwrap_or_else(|| panic!("unknown kind {}", node.kind));
            for key in node.props.keys() {
                assert!(descriptor.declares(key), "{}.{} undeclared", node.kind, key);
            }
            for child in node.children.iter().flatten() {
                check(child, catalog);
            }
        }

        for name in names() {
            for node in forest(name, &catalog).unwrap().iter() {
                check(node, &catalog);
            }
        }
    }

    #[test]
    fn test_each_load_stamps_fresh_ids() {
        let catalog = Catalog::builtin();
        let first = forest("article", &catalog).unwrap();
        let second = forest("article", &catalog).unwrap();

        for (a, b) in first.iter().zip(second.iter()) {
            assert_ne!(a.id, b.id);
        }
    }

    #[test]
    fn test_missing_catalog_type_fails_closed() {
        // A catalog without "button" cannot build the landing hero.
        let catalog = Catalog::new(
            Catalog::builtin()
                .iter()
                .filter(|descriptor| descriptor.tag != "button")
                .cloned()
                .collect(),
        );

        assert!(forest("landing", &catalog).is_none());
        assert!(forest("blank", &catalog).is_some());
    }
}
