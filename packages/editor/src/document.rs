//! Live document state.

use collage_model::Forest;

/// The forest currently being edited, plus a revision counter.
///
/// Every forest swap bumps the revision, whether it came from a
/// mutation, an undo, an import, or a template load. Downstream caches
/// compare revisions instead of diffing trees.
#[derive(Debug, Clone, Default)]
pub struct Document {
    forest: Forest,
    revision: u64,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document over an existing forest.
    pub fn from_forest(forest: Forest) -> Self {
        Self { forest, revision: 0 }
    }

    /// The live forest.
    pub fn forest(&self) -> &Forest {
        &self.forest
    }

    /// How many times the live forest has been swapped out.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Install `next` as the live forest, returning the forest it
    /// replaces.
    pub(crate) fn replace(&mut self, next: Forest) -> Forest {
        self.revision += 1;
        std::mem::replace(&mut self.forest, next)
    }
}
