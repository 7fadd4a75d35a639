use crate::config::Config;
use anyhow::Result;
use clap::Args;
use marquee_common::DirectorySource;
use marquee_sections::Page;

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Section to preview
    pub section: String,
}

/// Print the editor preview of a section (defaults fill in missing records)
pub fn preview(args: PreviewArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let source = DirectorySource::new(config.get_content_dir(cwd));

    let page = Page::load(&source, [args.section.as_str()], &config.render_options())?;
    print!("{}", page.preview()?);

    Ok(())
}
