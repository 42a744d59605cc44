use crate::id::NodeId;
use collage_catalog::{Catalog, ElementDescriptor, PropValue, UnknownType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Property mapping carried by a node. Keys are always a subset of the
/// keys declared by the node type's descriptor defaults.
pub type Props = BTreeMap<String, PropValue>;

/// One block in the document tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,

    /// Type tag resolved against the catalog at render/edit time.
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub props: Props,

    /// Present iff the type is a container; `None` means leaf. The wire
    /// format omits the key entirely for leaves.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Node>>,
}

impl Node {
    /// Build a node from a descriptor: defaults overlaid with `overrides`
    /// (overrides win per key), a fresh identifier, and an empty child
    /// sequence iff the type is a container.
    ///
    /// Override keys the descriptor never declared are dropped, keeping
    /// the prop set aligned with the type's declared key set.
    pub fn from_descriptor(descriptor: &ElementDescriptor, overrides: Props) -> Self {
        let mut props = descriptor.defaults.clone();
        for (key, value) in overrides {
            if props.contains_key(&key) {
                props.insert(key, value);
            }
        }

        Self {
            id: NodeId::fresh(),
            kind: descriptor.tag.clone(),
            props,
            children: descriptor.container.then(Vec::new),
        }
    }

    /// Pre-order depth-first search for `id` in this node's subtree.
    pub fn find(&self, id: &NodeId) -> Option<&Node> {
        if &self.id == id {
            return Some(self);
        }
        self.children
            .as_ref()?
            .iter()
            .find_map(|child| child.find(id))
    }

    /// Mutable variant of [`Node::find`].
    pub fn find_mut(&mut self, id: &NodeId) -> Option<&mut Node> {
        if &self.id == id {
            return Some(self);
        }
        self.children
            .as_mut()?
            .iter_mut()
            .find_map(|child| child.find_mut(id))
    }

    /// Whether this node owns a child sequence (structurally a container).
    pub fn is_container(&self) -> bool {
        self.children.is_some()
    }

    /// Append a child. Returns `false` (and drops nothing into place) on
    /// a leaf node.
    pub fn push_child(&mut self, child: Node) -> bool {
        match &mut self.children {
            Some(children) => {
                children.push(child);
                true
            }
            None => false,
        }
    }

    /// Number of nodes in this subtree, this node included.
    pub fn subtree_len(&self) -> usize {
        1 + self
            .children
            .iter()
            .flatten()
            .map(Node::subtree_len)
            .sum::<usize>()
    }
}

/// Instantiate a node of type `tag` from the catalog.
pub fn instantiate(catalog: &Catalog, tag: &str, overrides: Props) -> Result<Node, UnknownType> {
    let descriptor = catalog.require(tag)?;
    Ok(Node::from_descriptor(descriptor, overrides))
}

/// [`instantiate`] with no overrides: the node starts from pure defaults.
pub fn instantiate_default(catalog: &Catalog, tag: &str) -> Result<Node, UnknownType> {
    instantiate(catalog, tag, Props::new())
}
