use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use collage_catalog::Catalog;
use collage_render::{render_fragment, render_page, RenderOptions};
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Document to render
    pub input: PathBuf,

    /// Where to write the HTML (defaults to the configured out dir)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the HTML instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// Emit the body markup only, without the page shell
    #[arg(long)]
    pub fragment: bool,

    /// Page title for the document head
    #[arg(long)]
    pub title: Option<String>,
}

pub fn render(args: RenderArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;

    let input_path = PathBuf::from(cwd).join(&args.input);
    let source = fs::read_to_string(&input_path)
        .map_err(|err| anyhow!("Cannot read {}: {}", args.input.display(), err))?;
    let forest = collage_model::import(&source)
        .map_err(|err| anyhow!("{} is not a valid document: {}", args.input.display(), err))?;

    let mut options = RenderOptions::default();
    if let Some(title) = args.title {
        options.title = title;
    }

    let catalog = Catalog::builtin();
    let html = if args.fragment {
        render_fragment(&forest, &catalog, options)
    } else {
        render_page(&forest, &catalog, options)
    };

    if args.stdout {
        println!("{html}");
        return Ok(());
    }

    let out_path = match args.output {
        Some(output) => PathBuf::from(cwd).join(output),
        None => {
            let name = input_path
                .file_name()
                .ok_or_else(|| anyhow!("Cannot derive an output name from {}", args.input.display()))?;
            config.get_out_dir(cwd).join(name).with_extension("html")
        }
    };

    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&out_path, html)?;

    println!(
        "{} Rendered {} → {}",
        "✓".green().bold(),
        args.input.display(),
        out_path.display()
    );

    Ok(())
}
