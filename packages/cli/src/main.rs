mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    check, inspect, new, render, templates, CheckArgs, InspectArgs, NewArgs, RenderArgs,
    TemplatesArgs,
};

/// Collage CLI - Block-based page builder
#[derive(Parser, Debug)]
#[command(name = "collage")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a new document from a template
    New(NewArgs),

    /// List built-in templates and block types
    Templates(TemplatesArgs),

    /// Print the outline of a document
    Inspect(InspectArgs),

    /// Verify that every block uses a registered type
    Check(CheckArgs),

    /// Render a document to an HTML preview
    Render(RenderArgs),
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let cwd = std::env::current_dir()
        .expect("Cannot get current directory")
        .display()
        .to_string();

    let result = match cli.command {
        Command::New(args) => new(args, &cwd),
        Command::Templates(args) => templates(args),
        Command::Inspect(args) => inspect(args, &cwd),
        Command::Check(args) => check(args, &cwd),
        Command::Render(args) => render(args, &cwd),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
