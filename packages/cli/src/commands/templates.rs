use anyhow::Result;
use clap::Args;
use collage_catalog::Catalog;
use colored::Colorize;

#[derive(Debug, Args)]
pub struct TemplatesArgs {}

pub fn templates(_args: TemplatesArgs) -> Result<()> {
    let catalog = Catalog::builtin();

    println!("{}", "Available templates:".bright_blue().bold());
    for name in collage_editor::templates::names() {
        let padded = format!("{name:<10}");
        match collage_editor::templates::forest(name, &catalog) {
            Some(forest) if forest.is_empty() => {
                println!("  {} {} empty canvas", "•".green(), padded.bright_white());
            }
            Some(forest) => {
                println!(
                    "  {} {} {} blocks ({} nodes)",
                    "•".green(),
                    padded.bright_white(),
                    forest.len(),
                    forest.total_len()
                );
            }
            None => {
                println!("  {} {} unavailable", "•".red(), padded.bright_white());
            }
        }
    }

    println!();
    println!("{}", "Block types:".bright_blue().bold());
    for descriptor in catalog.iter() {
        let shape = if descriptor.container {
            "container"
        } else {
            "leaf"
        };
        println!(
            "  {} {} {} ({}, {} fields)",
            "•".green(),
            format!("{:<10}", descriptor.tag).bright_white(),
            descriptor.label,
            shape,
            descriptor.fields.len()
        );
    }

    Ok(())
}
