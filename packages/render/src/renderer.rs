//! The render contract.
//!
//! The core walks the forest depth-first and hands every node to a
//! [`BlockRenderer`] as `(node, resolved props, rendered children)`.
//! What comes back is opaque to the core; the walk only collects and
//! nests it.

use collage_catalog::Catalog;
use collage_model::{Forest, Node};

use crate::resolved::ResolvedProps;

/// Implemented by any presentation layer that can turn one block into
/// a renderable unit.
pub trait BlockRenderer {
    type Output;

    /// Render a node whose type is registered. `children` carries the
    /// already-rendered child sequence and is present iff the node is a
    /// container.
    fn render_block(
        &self,
        node: &Node,
        props: &ResolvedProps<'_>,
        children: Option<Vec<Self::Output>>,
    ) -> Self::Output;

    /// Render a visible stand-in for a node whose type has no catalog
    /// entry. The node itself is preserved; only its presentation
    /// degrades.
    fn render_placeholder(&self, node: &Node, children: Option<Vec<Self::Output>>)
        -> Self::Output;
}

/// Render every root block in order, depth-first within containers.
pub fn render_forest<R: BlockRenderer>(
    forest: &Forest,
    catalog: &Catalog,
    renderer: &R,
) -> Vec<R::Output> {
    forest
        .iter()
        .map(|node| render_node(node, catalog, renderer))
        .collect()
}

fn render_node<R: BlockRenderer>(node: &Node, catalog: &Catalog, renderer: &R) -> R::Output {
    let children = node.children.as_ref().map(|children| {
        children
            .iter()
            .map(|child| render_node(child, catalog, renderer))
            .collect()
    });

    match catalog.get(&node.kind) {
        Some(descriptor) => {
            let props = ResolvedProps::new(node, Some(descriptor));
            renderer.render_block(node, &props, children)
        }
        None => {
            tracing::warn!(id = %node.id, kind = %node.kind, "no descriptor; rendering placeholder");
            renderer.render_placeholder(node, children)
        }
    }
}
