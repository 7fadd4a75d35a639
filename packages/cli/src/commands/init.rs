use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use marquee_editor::PreviewRegistry;
use marquee_sections::registry::entries;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Content directory
    #[arg(short, long, default_value = "content")]
    pub content_dir: String,

    /// Force overwrite existing config and records
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing Marquee content...".bright_blue().bold());

    let config = Config {
        content_dir: args.content_dir.clone(),
        ..Config::default()
    };

    let content_dir = config.get_content_dir(cwd);
    if !content_dir.exists() {
        fs::create_dir_all(&content_dir)?;
        println!("  {} Created {}/", "✓".green(), args.content_dir);
    }

    // One record per section, seeded with the section's defaults
    let previews = PreviewRegistry::new();
    for entry in entries() {
        let path = content_dir.join(format!("{}.json", entry.key));
        if path.exists() && !args.force {
            continue;
        }

        let editor = entry.editor(None, previews.clone(), config.render_options());
        fs::write(&path, serde_json::to_string_pretty(editor.content())?)?;
        println!("  {} Created {}/{}.json", "✓".green(), args.content_dir, entry.key);
    }

    fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;
    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);

    println!();
    println!("{}", "✨ Ready! Try: marquee preview hero".green().bold());

    Ok(())
}
