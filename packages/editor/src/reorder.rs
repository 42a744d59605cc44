//! Root-level drag reorder.

use collage_model::{Forest, NodeId};

/// Compute the forest after moving `source_id` into `target_id`'s
/// position.
///
/// Classic array move: the source leaves its index and is reinserted at
/// the index the target held before the move, shifting everything in
/// between by one. Dragging down places the source after the target;
/// dragging up places it before. Both ids must name root-level blocks,
/// and either id failing to resolve (or the two being equal) yields
/// `None`.
pub fn move_root(forest: &Forest, source_id: &NodeId, target_id: &NodeId) -> Option<Forest> {
    if source_id == target_id {
        return None;
    }

    let from = forest.root_index(source_id)?;
    let to = forest.root_index(target_id)?;

    let mut nodes = forest.clone().into_nodes();
    let node = nodes.remove(from);
    nodes.insert(to, node);
    Some(Forest::from(nodes))
}
