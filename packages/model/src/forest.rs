use crate::id::NodeId;
use crate::node::Node;
use serde::{Deserialize, Serialize};

/// The ordered top-level sequence of nodes being edited.
///
/// Order is paint order and is preserved exactly through undo, export,
/// and import. The forest is always replaced wholesale by the editor;
/// nothing outside this crate mutates one in place.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Forest {
    nodes: Vec<Node>,
}

impl Forest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// Pre-order depth-first lookup across the whole forest, descending
    /// into every container.
    pub fn find(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.iter().find_map(|node| node.find(id))
    }

    /// Mutable variant of [`Forest::find`].
    pub fn find_mut(&mut self, id: &NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find_map(|node| node.find_mut(id))
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.find(id).is_some()
    }

    /// Position of `id` within the root-level sequence only; nested nodes
    /// report `None`.
    pub fn root_index(&self, id: &NodeId) -> Option<usize> {
        self.nodes.iter().position(|node| &node.id == id)
    }

    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Remove the root-level node with `id`, returning it. Nested or
    /// missing ids leave the forest untouched.
    pub fn remove_root(&mut self, id: &NodeId) -> Option<Node> {
        let index = self.root_index(id)?;
        Some(self.nodes.remove(index))
    }

    /// Total node count, containers descended.
    pub fn total_len(&self) -> usize {
        self.nodes.iter().map(Node::subtree_len).sum()
    }
}

impl From<Vec<Node>> for Forest {
    fn from(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }
}

impl FromIterator<Node> for Forest {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Forest {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
