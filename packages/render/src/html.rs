//! Reference HTML preview renderer.
//!
//! Maps the six built-in block types to semantic HTML and emits the
//! resulting [`VNode`] tree as markup. Unknown types become a visible
//! placeholder element instead of breaking the page.

use collage_catalog::{Catalog, PropValue};
use collage_model::{Forest, Node};

use crate::renderer::{render_forest, BlockRenderer};
use crate::resolved::ResolvedProps;
use crate::vdom::VNode;

/// Options for HTML emission
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Pretty print with newlines and indentation
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
    /// Page title used by [`render_page`]
    pub title: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
            title: "Collage preview".to_string(),
        }
    }
}

/// Renders blocks to [`VNode`] trees.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl BlockRenderer for HtmlRenderer {
    type Output = VNode;

    fn render_block(
        &self,
        node: &Node,
        props: &ResolvedProps<'_>,
        children: Option<Vec<VNode>>,
    ) -> VNode {
        match node.kind.as_str() {
            "heading" => heading(props),
            "paragraph" => paragraph(props),
            "image" => image(props),
            "button" => button(props),
            "section" => section(props, children.unwrap_or_default()),
            "spacer" => spacer(props),
            // Registered in the catalog, but not a type this reference
            // renderer knows how to draw.
            _ => self.render_placeholder(node, children),
        }
    }

    fn render_placeholder(&self, node: &Node, children: Option<Vec<VNode>>) -> VNode {
        VNode::element("div")
            .with_attr("class", "unknown-block")
            .with_attr("data-block", node.kind.as_str())
            .with_child(VNode::text(format!("Unknown block: {}", node.kind)))
            .with_children(children.unwrap_or_default())
    }
}

fn heading(props: &ResolvedProps<'_>) -> VNode {
    let level = (props.number("level").unwrap_or(2.0) as i64).clamp(1, 6);
    let mut node = VNode::element(format!("h{level}"))
        .with_child(VNode::text(props.text("text").unwrap_or_default()));

    if let Some(align) = props.text("align") {
        if align != "left" {
            node = node.with_style("text-align", align);
        }
    }
    node
}

fn paragraph(props: &ResolvedProps<'_>) -> VNode {
    let mut node = VNode::element("p")
        .with_child(VNode::text(props.text("text").unwrap_or_default()));

    if let Some(size) = props.number("size") {
        node = node.with_style("font-size", px(size));
    }
    node
}

fn image(props: &ResolvedProps<'_>) -> VNode {
    let mut node = VNode::element("img")
        .with_attr("src", props.text("src").unwrap_or_default())
        .with_attr("alt", props.text("alt").unwrap_or_default());

    if let Some(width) = props.number("width") {
        node = node.with_style("width", percent(width));
    }
    node
}

fn button(props: &ResolvedProps<'_>) -> VNode {
    let variant = props.text("variant").unwrap_or("primary");
    VNode::element("a")
        .with_attr("class", format!("button button-{variant}"))
        .with_attr("href", props.text("href").unwrap_or("#"))
        .with_child(VNode::text(props.text("label").unwrap_or_default()))
}

fn section(props: &ResolvedProps<'_>, children: Vec<VNode>) -> VNode {
    let mut node = VNode::element("section");

    if let Some(background) = props.text("background") {
        node = node.with_style("background", background);
    }
    if let Some(padding) = props.number("padding") {
        node = node.with_style("padding", px(padding));
    }
    node.with_children(children)
}

fn spacer(props: &ResolvedProps<'_>) -> VNode {
    VNode::element("div")
        .with_attr("class", "spacer")
        .with_style("height", px(props.number("height").unwrap_or(32.0)))
}

fn px(value: f64) -> String {
    format!("{}px", PropValue::from(value))
}

fn percent(value: f64) -> String {
    format!("{}%", PropValue::from(value))
}

/// Render the forest's blocks as an HTML fragment.
pub fn render_fragment(forest: &Forest, catalog: &Catalog, options: RenderOptions) -> String {
    let nodes = render_forest(forest, catalog, &HtmlRenderer);

    let mut ctx = Context::new(options);
    for node in &nodes {
        emit(node, &mut ctx);
    }
    ctx.get_output()
}

/// Render the forest as a complete standalone HTML document.
pub fn render_page(forest: &Forest, catalog: &Catalog, options: RenderOptions) -> String {
    let nodes = render_forest(forest, catalog, &HtmlRenderer);
    let title = escape_html(&options.title);

    let mut ctx = Context::new(options);
    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line("<html>");
    ctx.indent();

    ctx.add_line("<head>");
    ctx.indent();
    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    ctx.add_line(&format!("<title>{}</title>", title));
    ctx.add_line("<style>");
    ctx.indent();
    ctx.add_line("body { margin: 0 auto; max-width: 720px; font-family: system-ui, sans-serif; }");
    ctx.add_line("img { display: block; }");
    ctx.add_line(".button { display: inline-block; padding: 8px 16px; border-radius: 4px; text-decoration: none; }");
    ctx.add_line(".button-primary { background: #3366ff; color: white; }");
    ctx.add_line(".button-secondary { background: #e5e7eb; color: #111827; }");
    ctx.add_line(".button-outline { border: 1px solid #3366ff; color: #3366ff; }");
    ctx.add_line(".unknown-block { border: 1px dashed #cc3333; color: #cc3333; padding: 8px; }");
    ctx.dedent();
    ctx.add_line("</style>");
    ctx.dedent();
    ctx.add_line("</head>");

    ctx.add_line("<body>");
    ctx.indent();
    for node in &nodes {
        emit(node, &mut ctx);
    }
    ctx.dedent();
    ctx.add_line("</body>");

    ctx.dedent();
    ctx.add_line("</html>");

    ctx.get_output()
}

struct Context {
    options: RenderOptions,
    depth: usize,
    buffer: String,
}

impl Context {
    fn new(options: RenderOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        let indent = self.options.indent.clone();
        for _ in 0..self.depth {
            self.add(&indent);
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

fn emit(node: &VNode, ctx: &mut Context) {
    match node {
        VNode::Text { content } => {
            ctx.add_line(&escape_html(content));
        }

        VNode::Element {
            tag,
            attributes,
            styles,
            children,
        } => {
            if ctx.options.pretty {
                ctx.add_indent();
            }
            ctx.add(&format!("<{}", tag));

            for (name, value) in attributes {
                ctx.add(&format!(" {}=\"{}\"", name, escape_html(value)));
            }

            if !styles.is_empty() {
                let css: Vec<String> = styles
                    .iter()
                    .map(|(key, value)| format!("{}: {}", key, value))
                    .collect();
                ctx.add(&format!(" style=\"{}\"", escape_html(&css.join("; "))));
            }

            if children.is_empty() && is_void(tag) {
                ctx.add(" />");
                if ctx.options.pretty {
                    ctx.add("\n");
                }
                return;
            }

            ctx.add(">");

            // A lone text child stays inline: <h2>Heading</h2>.
            match children.as_slice() {
                [] => {}
                [VNode::Text { content }] => {
                    ctx.add(&escape_html(content));
                }
                _ => {
                    if ctx.options.pretty {
                        ctx.add("\n");
                    }
                    ctx.indent();
                    for child in children {
                        emit(child, ctx);
                    }
                    ctx.dedent();
                    if ctx.options.pretty {
                        ctx.add_indent();
                    }
                }
            }

            ctx.add(&format!("</{}>", tag));
            if ctx.options.pretty {
                ctx.add("\n");
            }
        }
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn is_void(tag: &str) -> bool {
    matches!(
        tag,
        "img" | "input" | "br" | "hr" | "meta" | "link" | "area" | "base" | "col" | "embed"
            | "param" | "source" | "track" | "wbr"
    )
}
