use crate::config::Config;
use anyhow::Result;
use clap::Args;
use marquee_common::{DirectorySource, RecordSource};
use marquee_sections::{lookup, section_keys};

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Sections to render (defaults to every section, in page order)
    pub sections: Vec<String>,
}

/// Print public display markup. Sections without a record print nothing.
pub fn render(args: RenderArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let source = DirectorySource::new(config.get_content_dir(cwd));
    let options = config.render_options();

    let keys: Vec<String> = if args.sections.is_empty() {
        section_keys().map(str::to_string).collect()
    } else {
        args.sections
    };

    for key in &keys {
        let entry = lookup(key)?;
        let record = source.load(key)?;
        if record.is_none() {
            tracing::debug!(section = %key, "no record; nothing to render");
        }
        print!("{}", entry.display(record.as_ref(), &options));
    }

    Ok(())
}
