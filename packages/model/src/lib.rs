//! Document tree model: nodes, the ordered forest they live in, default
//! construction from catalog descriptors, and the JSON codec.

mod codec;
mod forest;
mod id;
mod node;

pub use codec::{export, import, InvalidDocument};
pub use forest::Forest;
pub use id::NodeId;
pub use node::{instantiate, instantiate_default, Node, Props};

// Prop values are defined next to the descriptors they default from.
pub use collage_catalog::PropValue;
