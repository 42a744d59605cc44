use anyhow::{anyhow, Result};
use clap::Args;
use collage_catalog::Catalog;
use collage_model::{import, Node};
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Document to inspect
    pub input: PathBuf,
}

pub fn inspect(args: InspectArgs, cwd: &str) -> Result<()> {
    let path = PathBuf::from(cwd).join(&args.input);
    let source = fs::read_to_string(&path)
        .map_err(|err| anyhow!("Cannot read {}: {}", args.input.display(), err))?;
    let forest = import(&source)
        .map_err(|err| anyhow!("{} is not a valid document: {}", args.input.display(), err))?;
    let catalog = Catalog::builtin();

    println!(
        "{}",
        format!("📄 {}", args.input.display()).bright_blue().bold()
    );

    if forest.is_empty() {
        println!("  {}", "(empty document)".dimmed());
    }
    for node in forest.iter() {
        print_node(node, &catalog, 1);
    }

    println!();
    println!(
        "{} root blocks, {} nodes total",
        forest.len(),
        forest.total_len()
    );

    Ok(())
}

fn print_node(node: &Node, catalog: &Catalog, depth: usize) {
    let indent = "  ".repeat(depth);
    let label = match catalog.get(&node.kind) {
        Some(descriptor) => descriptor.label.clone().normal(),
        None => format!("{} (unknown type)", node.kind).yellow(),
    };

    println!(
        "{}{} {} {} {}",
        indent,
        "•".green(),
        label,
        format!("#{}", node.id).dimmed(),
        summarize(node).dimmed()
    );

    for child in node.children.iter().flatten() {
        print_node(child, catalog, depth + 1);
    }
}

/// First human-meaningful property value, shortened for one line.
fn summarize(node: &Node) -> String {
    for key in ["text", "label", "src", "alt"] {
        if let Some(value) = node.props.get(key).and_then(|value| value.as_text()) {
            if !value.is_empty() {
                return format!("\"{}\"", truncate(value, 40));
            }
        }
    }
    String::new()
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let head: String = text.chars().take(max).collect();
        format!("{head}...")
    }
}
