mod commands;
mod config;
mod store;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{edit, init, preview, render, sections, EditArgs, InitArgs, PreviewArgs, RenderArgs};

/// Marquee CLI - edit and preview site sections from the terminal
#[derive(Parser, Debug)]
#[command(name = "marquee")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a content directory with default records
    Init(InitArgs),

    /// List the editable sections and their fields
    Sections,

    /// Render display markup for stored records
    Render(RenderArgs),

    /// Preview a section as its editor would show it
    Preview(PreviewArgs),

    /// Apply mutations to a section and save it
    Edit(EditArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(if cli.verbose { "debug" } else { "info" })
            }),
        )
        .init();

    let result = match std::env::current_dir() {
        Ok(dir) => {
            let cwd = dir.display().to_string();
            match cli.command {
                Command::Init(args) => init(args, &cwd),
                Command::Sections => sections(),
                Command::Render(args) => render(args, &cwd),
                Command::Preview(args) => preview(args, &cwd),
                Command::Edit(args) => edit(args, &cwd).await,
            }
        }
        Err(err) => Err(anyhow::anyhow!("Cannot get current directory: {}", err)),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
