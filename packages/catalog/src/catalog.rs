use crate::descriptor::{ElementDescriptor, FieldKind, FieldSpec};
use crate::error::UnknownType;

/// Ordered, immutable registry of element-type descriptors.
///
/// Entry order is the palette order presentation layers show to the user.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<ElementDescriptor>,
}

impl Catalog {
    pub fn new(entries: Vec<ElementDescriptor>) -> Self {
        Self { entries }
    }

    /// The six built-in block types.
    pub fn builtin() -> Self {
        Self::new(vec![
            ElementDescriptor::new(
                "heading",
                "Heading",
                vec![
                    ("text", "Heading".into()),
                    ("level", 2.into()),
                    ("align", "left".into()),
                ],
                vec![
                    FieldSpec::new("text", "Text", FieldKind::Text),
                    FieldSpec::new(
                        "level",
                        "Level",
                        FieldKind::Number { min: 1.0, max: 6.0 },
                    ),
                    FieldSpec::new(
                        "align",
                        "Alignment",
                        FieldKind::Select {
                            options: vec![
                                "left".to_string(),
                                "center".to_string(),
                                "right".to_string(),
                            ],
                        },
                    ),
                ],
            ),
            ElementDescriptor::new(
                "paragraph",
                "Paragraph",
                vec![
                    ("text", "Write something here.".into()),
                    ("size", 16.into()),
                ],
                vec![
                    FieldSpec::new("text", "Text", FieldKind::TextArea),
                    FieldSpec::new(
                        "size",
                        "Font size",
                        FieldKind::Number {
                            min: 10.0,
                            max: 48.0,
                        },
                    ),
                ],
            ),
            ElementDescriptor::new(
                "image",
                "Image",
                vec![
                    ("src", "".into()),
                    ("alt", "".into()),
                    ("width", 100.into()),
                ],
                vec![
                    FieldSpec::new("src", "Source URL", FieldKind::Text),
                    FieldSpec::new("alt", "Alt text", FieldKind::Text),
                    FieldSpec::new(
                        "width",
                        "Width (%)",
                        FieldKind::Number {
                            min: 10.0,
                            max: 100.0,
                        },
                    ),
                ],
            ),
            ElementDescriptor::new(
                "button",
                "Button",
                vec![
                    ("label", "Click me".into()),
                    ("href", "#".into()),
                    ("variant", "primary".into()),
                ],
                vec![
                    FieldSpec::new("label", "Label", FieldKind::Text),
                    FieldSpec::new("href", "Link", FieldKind::Text),
                    FieldSpec::new(
                        "variant",
                        "Variant",
                        FieldKind::Select {
                            options: vec![
                                "primary".to_string(),
                                "secondary".to_string(),
                                "outline".to_string(),
                            ],
                        },
                    ),
                ],
            ),
            ElementDescriptor::new(
                "section",
                "Section",
                vec![("background", "#ffffff".into()), ("padding", 24.into())],
                vec![
                    FieldSpec::new("background", "Background", FieldKind::Color),
                    FieldSpec::new(
                        "padding",
                        "Padding",
                        FieldKind::Number { min: 0.0, max: 96.0 },
                    ),
                ],
            )
            .container(),
            ElementDescriptor::new(
                "spacer",
                "Spacer",
                vec![("height", 32.into())],
                vec![FieldSpec::new(
                    "height",
                    "Height",
                    FieldKind::Number {
                        min: 4.0,
                        max: 200.0,
                    },
                )],
            ),
        ])
    }

    pub fn get(&self, tag: &str) -> Option<&ElementDescriptor> {
        self.entries.iter().find(|entry| entry.tag == tag)
    }

    /// Lookup that fails with [`UnknownType`] for unregistered tags.
    pub fn require(&self, tag: &str) -> Result<&ElementDescriptor, UnknownType> {
        self.get(tag).ok_or_else(|| UnknownType::new(tag))
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.get(tag).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ElementDescriptor> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
