use anyhow::Result;
use colored::Colorize;
use marquee_sections::registry::entries;

pub fn sections() -> Result<()> {
    for entry in entries() {
        let fields: Vec<&str> = (entry.fields)().iter().map(|f| f.name).collect();
        println!(
            "{:<14} {:<18} {}",
            entry.key.bright_white().bold(),
            entry.title,
            fields.join(", ").dimmed()
        );
    }
    Ok(())
}
