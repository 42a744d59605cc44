//! # Forest Mutations
//!
//! High-level semantic operations on the block forest.
//!
//! ## Design Principles
//!
//! 1. **Intent-preserving**: Each mutation represents one user-level edit
//! 2. **Pure**: `apply` never touches the input forest; it returns a
//!    replacement forest or nothing
//! 3. **Total**: stale identifiers, unknown type tags, and undeclared
//!    property keys degrade to "no change" instead of failing
//!
//! ## Mutation Semantics
//!
//! ### Add
//! - Instantiates the tag's descriptor defaults and appends at the root
//! - Unknown tags change nothing
//!
//! ### Remove
//! - Removes a root-level block together with its whole subtree
//! - Nested nodes cannot be removed individually; they travel with
//!   their parent
//!
//! ### SetProperty
//! - Atomic replacement of one property value (no merging)
//! - Resolves its id at any depth, containers included
//! - Only keys declared by the node type's descriptor may be written
//!
//! ### Reorder
//! - Array move of one root block into another root block's position
//! - See [`reorder`](crate::reorder) for the exact shifting rule

use collage_catalog::{Catalog, PropValue};
use collage_model::{instantiate_default, Forest, NodeId};
use serde::{Deserialize, Serialize};

use crate::reorder;

/// Semantic mutations (intent-preserving operations)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Append a freshly instantiated block at the end of the root row
    Add {
        tag: String,
    },

    /// Remove a root-level block and its subtree
    Remove {
        node_id: NodeId,
    },

    /// Replace one property value (atomic, any depth)
    SetProperty {
        node_id: NodeId,
        key: String,
        value: PropValue,
    },

    /// Move a root-level block into another root-level block's position
    Reorder {
        source_id: NodeId,
        target_id: NodeId,
    },
}

impl Mutation {
    /// Apply the mutation to `forest`, producing the replacement forest.
    ///
    /// Returns `None` when the mutation changes nothing; callers skip
    /// the commit in that case so no-ops never consume an undo slot.
    pub fn apply(&self, forest: &Forest, catalog: &Catalog) -> Option<Forest> {
        match self {
            Mutation::Add { tag } => Self::apply_add(forest, catalog, tag),

            Mutation::Remove { node_id } => Self::apply_remove(forest, node_id),

            Mutation::SetProperty { node_id, key, value } => {
                Self::apply_set_property(forest, catalog, node_id, key, value)
            }

            Mutation::Reorder { source_id, target_id } => {
                reorder::move_root(forest, source_id, target_id)
            }
        }
    }

    fn apply_add(forest: &Forest, catalog: &Catalog, tag: &str) -> Option<Forest> {
        let node = match instantiate_default(catalog, tag) {
            Ok(node) => node,
            Err(err) => {
                tracing::debug!(%err, "add ignored");
                return None;
            }
        };

        let mut next = forest.clone();
        next.push(node);
        Some(next)
    }

    fn apply_remove(forest: &Forest, node_id: &NodeId) -> Option<Forest> {
        if forest.root_index(node_id).is_none() {
            tracing::debug!(%node_id, "remove ignored; id is not a root block");
            return None;
        }

        let mut next = forest.clone();
        next.remove_root(node_id);
        Some(next)
    }

    fn apply_set_property(
        forest: &Forest,
        catalog: &Catalog,
        node_id: &NodeId,
        key: &str,
        value: &PropValue,
    ) -> Option<Forest> {
        let target = forest.find(node_id)?;

        // Unknown types carry no descriptor, so nothing on them is
        // editable; known types accept only their declared keys.
        let descriptor = catalog.get(&target.kind)?;
        if !descriptor.declares(key) {
            tracing::debug!(kind = %target.kind, key, "property not declared; ignoring");
            return None;
        }

        let mut next = forest.clone();
        let node = next.find_mut(node_id)?;
        node.props.insert(key.to_string(), value.clone());
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use collage_model::Node;

    fn catalog() -> Catalog {
        Catalog::builtin()
    }

    #[test]
    fn test_add_appends_at_the_end() {
        let catalog = catalog();
        let forest = Forest::new();

        let after_one = Mutation::Add { tag: "heading".to_string() }
            .apply(&forest, &catalog)
            .unwrap();
        let after_two = Mutation::Add { tag: "button".to_string() }
            .apply(&after_one, &catalog)
            .unwrap();

        assert_eq!(after_two.len(), 2);
        assert_eq!(after_two.nodes()[0].kind, "heading");
        assert_eq!(after_two.nodes()[1].kind, "button");
        // The input forest was never touched.
        assert!(forest.is_empty());
    }

    #[test]
    fn test_add_unknown_tag_is_a_no_op() {
        let catalog = catalog();
        let forest = Forest::new();

        let mutation = Mutation::Add { tag: "carousel".to_string() };
        assert!(mutation.apply(&forest, &catalog).is_none());
    }

    #[test]
    fn test_add_stamps_distinct_ids() {
        let catalog = catalog();
        let forest = Forest::new();

        let mutation = Mutation::Add { tag: "spacer".to_string() };
        let once = mutation.apply(&forest, &catalog).unwrap();
        let twice = mutation.apply(&once, &catalog).unwrap();

        assert_ne!(twice.nodes()[0].id, twice.nodes()[1].id);
    }

    #[test]
    fn test_remove_root_block() {
        let catalog = catalog();
        let forest: Forest = ["heading", "paragraph"]
            .iter()
            .map(|tag| instantiate_default(&catalog, tag).unwrap())
            .collect();
        let id = forest.nodes()[0].id.clone();

        let next = Mutation::Remove { node_id: id.clone() }
            .apply(&forest, &catalog)
            .unwrap();

        assert_eq!(next.len(), 1);
        assert!(!next.contains(&id));
        // Removing the same id again changes nothing.
        assert!(Mutation::Remove { node_id: id }.apply(&next, &catalog).is_none());
    }

    #[test]
    fn test_remove_nested_id_is_a_no_op() {
        let catalog = catalog();
        let mut section = instantiate_default(&catalog, "section").unwrap();
        let child = instantiate_default(&catalog, "paragraph").unwrap();
        let child_id = child.id.clone();
        section.push_child(child);
        let forest = Forest::from(vec![section]);

        let mutation = Mutation::Remove { node_id: child_id };
        assert!(mutation.apply(&forest, &catalog).is_none());
    }

    #[test]
    fn test_set_property_replaces_value() {
        let catalog = catalog();
        let forest = Forest::from(vec![instantiate_default(&catalog, "heading").unwrap()]);
        let id = forest.nodes()[0].id.clone();

        let next = Mutation::SetProperty {
            node_id: id.clone(),
            key: "text".to_string(),
            value: PropValue::from("Welcome"),
        }
        .apply(&forest, &catalog)
        .unwrap();

        assert_eq!(
            next.find(&id).unwrap().props.get("text"),
            Some(&PropValue::from("Welcome"))
        );
        // Original forest still carries the default.
        assert_eq!(
            forest.find(&id).unwrap().props.get("text"),
            Some(&PropValue::from("Heading"))
        );
    }

    #[test]
    fn test_set_property_reaches_nested_nodes() {
        let catalog = catalog();
        let mut section = instantiate_default(&catalog, "section").unwrap();
        let child = instantiate_default(&catalog, "button").unwrap();
        let child_id = child.id.clone();
        section.push_child(child);
        let forest = Forest::from(vec![section]);

        let next = Mutation::SetProperty {
            node_id: child_id.clone(),
            key: "label".to_string(),
            value: PropValue::from("Buy now"),
        }
        .apply(&forest, &catalog)
        .unwrap();

        assert_eq!(
            next.find(&child_id).unwrap().props.get("label"),
            Some(&PropValue::from("Buy now"))
        );
    }

    #[test]
    fn test_set_property_rejects_undeclared_key() {
        let catalog = catalog();
        let forest = Forest::from(vec![instantiate_default(&catalog, "spacer").unwrap()]);
        let id = forest.nodes()[0].id.clone();

        let mutation = Mutation::SetProperty {
            node_id: id,
            key: "color".to_string(),
            value: PropValue::from("#ff0000"),
        };
        assert!(mutation.apply(&forest, &catalog).is_none());
    }

    #[test]
    fn test_set_property_on_unknown_kind_is_a_no_op() {
        let catalog = catalog();
        // Imported documents may carry type tags the catalog never heard of.
        let alien = Node {
            id: NodeId::from("alien-1"),
            kind: "hologram".to_string(),
            props: Default::default(),
            children: None,
        };
        let forest = Forest::from(vec![alien]);

        let mutation = Mutation::SetProperty {
            node_id: NodeId::from("alien-1"),
            key: "text".to_string(),
            value: PropValue::from("hi"),
        };
        assert!(mutation.apply(&forest, &catalog).is_none());
    }

    #[test]
    fn test_set_property_stale_id_is_a_no_op() {
        let catalog = catalog();
        let forest = Forest::from(vec![instantiate_default(&catalog, "heading").unwrap()]);

        let mutation = Mutation::SetProperty {
            node_id: NodeId::from("gone"),
            key: "text".to_string(),
            value: PropValue::from("x"),
        };
        assert!(mutation.apply(&forest, &catalog).is_none());
    }

    #[test]
    fn test_mutations_serialize_round_trip() {
        let mutation = Mutation::SetProperty {
            node_id: NodeId::from("abc"),
            key: "level".to_string(),
            value: PropValue::from(3),
        };

        let json = serde_json::to_string(&mutation).unwrap();
        let back: Mutation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mutation);
    }
}
