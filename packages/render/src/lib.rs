//! # Collage Render
//!
//! The render side of the engine: resolves each block's effective
//! properties against the catalog, walks the forest depth-first, and
//! hands every node to a pluggable [`BlockRenderer`]. A reference
//! renderer emits HTML through a small virtual DOM.
//!
//! The core never inspects what a renderer returns; unknown block types
//! degrade to the renderer's placeholder instead of failing.

mod html;
mod renderer;
mod resolved;
mod vdom;

pub use html::{render_fragment, render_page, HtmlRenderer, RenderOptions};
pub use renderer::{render_forest, BlockRenderer};
pub use resolved::ResolvedProps;
pub use vdom::VNode;
