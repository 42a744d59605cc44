//! # Collage Editor
//!
//! Core document editing engine for Collage.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ catalog: type tag → descriptor              │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: document lifecycle + mutations      │
//! │  - Apply mutations as whole-forest swaps    │
//! │  - Bounded undo history (snapshots)         │
//! │  - Selection + drag bookkeeping             │
//! │  - Import/export via the JSON codec         │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ render: forest → HTML preview               │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **The forest is source of truth**: selection and previews are derived views
//! 2. **Commits are wholesale**: each change swaps the entire forest
//! 3. **No-ops are free**: intents that change nothing never touch history
//! 4. **Undo is destructive**: snapshots pop off a bounded stack, no redo
//!
//! ## Usage
//!
//! ```rust,ignore
//! use collage_catalog::Catalog;
//! use collage_editor::Editor;
//!
//! let mut editor = Editor::new(Catalog::builtin());
//!
//! editor.add("heading");
//! let id = editor.forest().nodes()[0].id.clone();
//! editor.update_property(&id, "text", "Hello".into());
//!
//! // One step back
//! editor.undo();
//!
//! // Persist
//! let json = editor.export();
//! ```

mod document;
mod editor;
mod history;
mod mutations;
pub mod reorder;
pub mod templates;

pub use document::Document;
pub use editor::Editor;
pub use history::{History, SNAPSHOT_LIMIT};
pub use mutations::Mutation;

// Re-export the data-model types callers hold anyway
pub use collage_catalog::{Catalog, PropValue};
pub use collage_model::{Forest, InvalidDocument, Node, NodeId, Props};
