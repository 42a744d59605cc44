use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use collage_catalog::Catalog;
use collage_editor::{templates, Editor};
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Where to write the document
    #[arg(default_value = "page.collage.json")]
    pub output: PathBuf,

    /// Template to start from (see `collage templates`)
    #[arg(short, long)]
    pub template: Option<String>,

    /// Force overwrite an existing file
    #[arg(short, long)]
    pub force: bool,
}

pub fn new(args: NewArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let template = args.template.unwrap_or(config.default_template);

    let output = PathBuf::from(cwd).join(&args.output);
    if output.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            args.output.display()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    let mut editor = Editor::new(Catalog::builtin());
    if !editor.load_template(&template) {
        return Err(anyhow!(
            "Unknown template: {} (available: {})",
            template,
            templates::names().join(", ")
        ));
    }

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&output, editor.export())?;

    println!(
        "{} Created {} from the {} template ({} blocks)",
        "✓".green(),
        args.output.display(),
        template.bright_white(),
        editor.forest().len()
    );

    Ok(())
}
