use anyhow::{anyhow, bail, Result};
use clap::Args;
use collage_catalog::Catalog;
use collage_model::{import, Node};
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Document to check
    pub input: PathBuf,
}

pub fn check(args: CheckArgs, cwd: &str) -> Result<()> {
    let path = PathBuf::from(cwd).join(&args.input);
    let source = fs::read_to_string(&path)
        .map_err(|err| anyhow!("Cannot read {}: {}", args.input.display(), err))?;
    let forest = import(&source)
        .map_err(|err| anyhow!("{} is not a valid document: {}", args.input.display(), err))?;
    let catalog = Catalog::builtin();

    let mut unknown = vec![];
    let mut undeclared = vec![];
    for node in forest.iter() {
        collect_issues(node, &catalog, &mut unknown, &mut undeclared);
    }

    for (id, kind) in &unknown {
        println!(
            "{} #{} has unregistered type \"{}\"",
            "✗".red().bold(),
            id,
            kind
        );
    }
    for (id, kind, key) in &undeclared {
        println!(
            "{} #{} carries \"{}\", which \"{}\" does not declare",
            "⚠".yellow(),
            id,
            key,
            kind
        );
    }

    if unknown.is_empty() {
        println!(
            "{} All {} nodes use registered types",
            "✅".green(),
            forest.total_len()
        );
    } else {
        bail!("{} nodes have unregistered types", unknown.len());
    }

    Ok(())
}

fn collect_issues(
    node: &Node,
    catalog: &Catalog,
    unknown: &mut Vec<(String, String)>,
    undeclared: &mut Vec<(String, String, String)>,
) {
    match catalog.get(&node.kind) {
        Some(descriptor) => {
            for key in node.props.keys() {
                if !descriptor.declares(key) {
                    undeclared.push((node.id.to_string(), node.kind.clone(), key.clone()));
                }
            }
        }
        None => unknown.push((node.id.to_string(), node.kind.clone())),
    }

    for child in node.children.iter().flatten() {
        collect_issues(child, catalog, unknown, undeclared);
    }
}
