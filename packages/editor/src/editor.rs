//! # Edit Session
//!
//! Single-user editing session over one document: live forest, bounded
//! undo history, selection, and drag bookkeeping.
//!
//! ## Commit discipline
//!
//! Every state change funnels through [`Editor::commit`]: the forest
//! being replaced goes onto the history stack, the replacement becomes
//! live, and the selection is re-checked against the new forest. Intents
//! that change nothing (stale ids, unknown tags, undeclared keys) skip
//! the commit entirely, so undo never replays a no-op.

use collage_catalog::{Catalog, PropValue};
use collage_model::{self as model, Forest, InvalidDocument, Node, NodeId};

use crate::document::Document;
use crate::history::History;
use crate::mutations::Mutation;
use crate::templates;

/// Stateful editing session.
#[derive(Debug)]
pub struct Editor {
    catalog: Catalog,
    document: Document,
    history: History,

    /// Id of the currently selected node, if it still resolves.
    selection: Option<NodeId>,

    /// Id recorded by `drag_start`, cleared by `drag_end`.
    dragging: Option<NodeId>,
}

impl Editor {
    /// Create a session over an empty document.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_forest(catalog, Forest::new())
    }

    /// Create a session over an existing forest.
    pub fn with_forest(catalog: Catalog, forest: Forest) -> Self {
        Self {
            catalog,
            document: Document::from_forest(forest),
            history: History::new(),
            selection: None,
            dragging: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn forest(&self) -> &Forest {
        self.document.forest()
    }

    pub fn revision(&self) -> u64 {
        self.document.revision()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn history_depth(&self) -> usize {
        self.history.depth()
    }

    // ---------------------------------------------------------------
    // Intents
    // ---------------------------------------------------------------

    /// Append a new block of `tag` at the end of the root row.
    pub fn add(&mut self, tag: &str) -> bool {
        self.apply(Mutation::Add {
            tag: tag.to_string(),
        })
    }

    /// Remove the root-level block with `id` (and its subtree).
    pub fn remove(&mut self, id: &NodeId) -> bool {
        self.apply(Mutation::Remove {
            node_id: id.clone(),
        })
    }

    /// Replace one property value on the node with `id`.
    pub fn update_property(&mut self, id: &NodeId, key: &str, value: PropValue) -> bool {
        self.apply(Mutation::SetProperty {
            node_id: id.clone(),
            key: key.to_string(),
            value,
        })
    }

    /// Apply any mutation through the commit machinery.
    ///
    /// Returns whether the document changed.
    pub fn apply(&mut self, mutation: Mutation) -> bool {
        match mutation.apply(self.document.forest(), &self.catalog) {
            Some(next) => {
                tracing::debug!(?mutation, "applying");
                self.commit(next);
                true
            }
            None => {
                tracing::debug!(?mutation, "mutation changed nothing");
                false
            }
        }
    }

    /// Point the selection at `id`, or clear it with `None`.
    ///
    /// Ids that do not resolve anywhere in the forest clear the
    /// selection rather than dangling.
    pub fn select(&mut self, id: Option<NodeId>) {
        self.selection = id.filter(|id| self.document.forest().contains(id));
    }

    /// Id of the selected node, if any.
    pub fn selected_id(&self) -> Option<&NodeId> {
        self.selection.as_ref()
    }

    /// Resolve the selection against the live forest.
    pub fn selected(&self) -> Option<&Node> {
        self.document.forest().find(self.selection.as_ref()?)
    }

    /// Record the root-level block a drag gesture lifted.
    ///
    /// Nested nodes are not draggable; lifting one records nothing.
    pub fn drag_start(&mut self, id: &NodeId) {
        self.dragging = self
            .document
            .forest()
            .root_index(id)
            .map(|_| id.clone());
    }

    /// Id recorded by the drag in progress, if any.
    pub fn dragging(&self) -> Option<&NodeId> {
        self.dragging.as_ref()
    }

    /// Finish a drag gesture.
    ///
    /// With a target, the source block moves into the target's position;
    /// dropping outside any block (`None`) just ends the gesture.
    pub fn drag_end(&mut self, source: &NodeId, target: Option<&NodeId>) -> bool {
        self.dragging = None;
        let Some(target) = target else {
            return false;
        };

        self.apply(Mutation::Reorder {
            source_id: source.clone(),
            target_id: target.clone(),
        })
    }

    /// Reinstate the most recent history snapshot.
    ///
    /// Returns `false` when the history is empty. Undo consumes the
    /// snapshot; there is no redo.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(snapshot) => {
                // Direct swap: undo itself never records history.
                self.document.replace(snapshot);
                self.normalize_selection();
                tracing::debug!(
                    remaining = self.history.depth(),
                    "restored prior snapshot"
                );
                true
            }
            None => false,
        }
    }

    /// Replace the document with a named starter template.
    ///
    /// Unknown names leave everything untouched. The load itself is one
    /// undoable step.
    pub fn load_template(&mut self, name: &str) -> bool {
        match templates::forest(name, &self.catalog) {
            Some(forest) => {
                self.commit(forest);
                self.selection = None;
                self.dragging = None;
                true
            }
            None => {
                tracing::debug!(name, "unknown template");
                false
            }
        }
    }

    /// Serialize the live forest to its JSON document form.
    pub fn export(&self) -> String {
        model::export(self.document.forest())
    }

    /// Replace the document with one parsed from `text`.
    ///
    /// On failure the session is left exactly as it was; on success the
    /// replaced forest is one undo away and the selection is cleared.
    pub fn import(&mut self, text: &str) -> Result<(), InvalidDocument> {
        let forest = model::import(text).map_err(|err| {
            tracing::warn!(%err, "import rejected");
            err
        })?;

        self.commit(forest);
        self.selection = None;
        self.dragging = None;
        Ok(())
    }

    // ---------------------------------------------------------------

    /// Install `next` as the live forest, pushing the forest it
    /// replaces onto the history stack.
    fn commit(&mut self, next: Forest) {
        let prior = self.document.replace(next);
        self.history.push(prior);
        self.normalize_selection();

        tracing::debug!(
            revision = self.document.revision(),
            roots = self.document.forest().len(),
            history = self.history.depth(),
            "committed"
        );
    }

    /// Clear the selection unless it still resolves in the live forest.
    fn normalize_selection(&mut self) {
        if let Some(id) = &self.selection {
            if !self.document.forest().contains(id) {
                self.selection = None;
            }
        }
    }
}
