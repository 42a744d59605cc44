use crate::forest::Forest;
use crate::node::Node;
use serde_json::Value;
use thiserror::Error;

/// Import text that cannot be decoded into a forest.
///
/// The live document is never touched when import fails; callers keep
/// whatever forest they had.
#[derive(Error, Debug)]
pub enum InvalidDocument {
    #[error("document is not valid JSON: {0}")]
    Syntax(#[source] serde_json::Error),

    #[error("document root must be a sequence of nodes, found {found}")]
    NotASequence { found: &'static str },

    #[error("malformed node in document: {0}")]
    Node(#[source] serde_json::Error),
}

/// Encode the forest as a pretty-printed JSON array.
///
/// `import(export(f))` reproduces `f` exactly: identifiers, root order,
/// props, and nesting all survive the round trip.
pub fn export(forest: &Forest) -> String {
    // The model is a finite tree of string-keyed maps and scalars, which
    // serde_json always accepts.
    serde_json::to_string_pretty(forest).expect("forest serialization is infallible")
}

/// Decode `text` into a forest.
///
/// The only structural requirement is a JSON array of node objects at the
/// top level. Type tags are *not* checked against any catalog here; an
/// unknown tag imports fine and surfaces later at render/edit time.
pub fn import(text: &str) -> Result<Forest, InvalidDocument> {
    let value: Value = serde_json::from_str(text).map_err(InvalidDocument::Syntax)?;

    if !value.is_array() {
        return Err(InvalidDocument::NotASequence {
            found: json_kind(&value),
        });
    }

    let nodes: Vec<Node> = serde_json::from_value(value).map_err(InvalidDocument::Node)?;
    Ok(Forest::from(nodes))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "an object",
    }
}
