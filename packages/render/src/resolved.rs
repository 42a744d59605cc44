//! Property resolution for rendering.

use collage_catalog::{Catalog, ElementDescriptor, PropValue};
use collage_model::Node;

/// A node's effective properties: its own props overlaid on the
/// descriptor defaults.
///
/// Purely a view; nothing is cloned or merged eagerly. Nodes of unknown
/// type resolve against their own props only.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedProps<'a> {
    node: &'a Node,
    descriptor: Option<&'a ElementDescriptor>,
}

impl<'a> ResolvedProps<'a> {
    pub fn new(node: &'a Node, descriptor: Option<&'a ElementDescriptor>) -> Self {
        Self { node, descriptor }
    }

    /// Look the node's descriptor up in `catalog` and build the view.
    pub fn resolve(catalog: &'a Catalog, node: &'a Node) -> Self {
        Self::new(node, catalog.get(&node.kind))
    }

    /// Value for `key`: the node's own prop wins, else the default.
    pub fn get(&self, key: &str) -> Option<&'a PropValue> {
        self.node
            .props
            .get(key)
            .or_else(|| self.descriptor?.defaults.get(key))
    }

    pub fn text(&self, key: &str) -> Option<&'a str> {
        self.get(key)?.as_text()
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key)?.as_number()
    }

    /// Human-readable rendering of the value, whatever its kind.
    pub fn display(&self, key: &str) -> Option<String> {
        Some(self.get(key)?.to_string())
    }

    pub fn node(&self) -> &'a Node {
        self.node
    }

    pub fn descriptor(&self) -> Option<&'a ElementDescriptor> {
        self.descriptor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use collage_model::{instantiate, NodeId, Props};

    #[test]
    fn test_node_props_win_over_defaults() {
        let catalog = Catalog::builtin();
        let overrides: Props = [("text".to_string(), PropValue::from("Custom"))]
            .into_iter()
            .collect();
        let node = instantiate(&catalog, "heading", overrides).unwrap();

        let props = ResolvedProps::resolve(&catalog, &node);
        assert_eq!(props.text("text"), Some("Custom"));
        // Untouched keys still resolve through the defaults.
        assert_eq!(props.number("level"), Some(2.0));
        assert_eq!(props.text("align"), Some("left"));
    }

    #[test]
    fn test_unknown_kind_resolves_own_props_only() {
        let catalog = Catalog::builtin();
        let node = Node {
            id: NodeId::from("x"),
            kind: "hologram".to_string(),
            props: [("spin".to_string(), PropValue::from(3.5))]
                .into_iter()
                .collect(),
            children: None,
        };

        let props = ResolvedProps::resolve(&catalog, &node);
        assert!(props.descriptor().is_none());
        assert_eq!(props.number("spin"), Some(3.5));
        assert!(props.get("text").is_none());
    }

    #[test]
    fn test_display_formats_scalars() {
        let catalog = Catalog::builtin();
        let node = instantiate(&catalog, "spacer", Props::new()).unwrap();

        let props = ResolvedProps::resolve(&catalog, &node);
        // Whole numbers drop the decimal point.
        assert_eq!(props.display("height").as_deref(), Some("32"));
    }
}
