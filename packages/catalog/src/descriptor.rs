use crate::value::PropValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How a single editable property is presented by the form layer.
///
/// Constraints ride along with the kind that needs them: numbers carry
/// their range, selects carry their option set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldKind {
    /// Single-line text input.
    Text,
    /// Multi-line text input.
    TextArea,
    /// Numeric input clamped by the form layer to `min..=max`.
    Number { min: f64, max: f64 },
    /// One value out of a fixed option set.
    Select { options: Vec<String> },
    /// Color swatch input.
    Color,
}

/// One entry in a descriptor's generated-form schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Property key this field edits. Must be declared in the
    /// descriptor's default mapping.
    pub key: String,
    /// Human-readable label shown next to the form widget.
    pub label: String,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub fn new(key: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind,
        }
    }
}

/// Static definition of one element type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementDescriptor {
    /// Type tag stored on every node of this type.
    pub tag: String,
    /// Display name used by palettes and outlines.
    pub label: String,
    /// Complete property mapping a fresh node starts from. Every key a
    /// node of this type may ever hold is declared here.
    pub defaults: BTreeMap<String, PropValue>,
    /// Editable fields, in the order the form layer should render them.
    pub fields: Vec<FieldSpec>,
    /// Whether nodes of this type own an ordered child sequence.
    pub container: bool,
}

impl ElementDescriptor {
    pub fn new(
        tag: impl Into<String>,
        label: impl Into<String>,
        defaults: Vec<(&str, PropValue)>,
        fields: Vec<FieldSpec>,
    ) -> Self {
        Self {
            tag: tag.into(),
            label: label.into(),
            defaults: defaults
                .into_iter()
                .map(|(key, value)| (key.to_string(), value))
                .collect(),
            fields,
            container: false,
        }
    }

    pub fn container(mut self) -> Self {
        self.container = true;
        self
    }

    /// Whether `key` is part of this type's declared property set.
    pub fn declares(&self, key: &str) -> bool {
        self.defaults.contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_kind_serializes_with_kind_tag() {
        let field = FieldSpec::new(
            "height",
            "Height",
            FieldKind::Number {
                min: 4.0,
                max: 200.0,
            },
        );

        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["kind"]["kind"], "number");
        assert_eq!(json["kind"]["min"], 4.0);
        assert_eq!(json["kind"]["max"], 200.0);
    }

    #[test]
    fn descriptor_declares_default_keys_only() {
        let descriptor = ElementDescriptor::new(
            "badge",
            "Badge",
            vec![("text", "New".into())],
            vec![FieldSpec::new("text", "Text", FieldKind::Text)],
        );

        assert!(descriptor.declares("text"));
        assert!(!descriptor.declares("href"));
        assert!(!descriptor.container);
    }
}
