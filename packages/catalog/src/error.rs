use thiserror::Error;

/// A type tag with no catalog entry.
///
/// Never produced for nodes the engine creates itself; shows up when a
/// foreign or stale document references a type this build does not know.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown element type: {tag}")]
pub struct UnknownType {
    pub tag: String,
}

impl UnknownType {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }
}
