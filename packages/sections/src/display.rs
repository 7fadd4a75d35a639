use marquee_common::SectionRecord;
use marquee_editor::{seed, SectionSchema};
use marquee_render::{render_content, RenderOptions};

/// Render a public display section.
///
/// No record means nothing to show: the result is empty. Otherwise missing or
/// falsy fields fall back to the section's literal defaults.
pub fn display<S: SectionSchema>(record: Option<&SectionRecord>, options: &RenderOptions) -> String {
    let Some(record) = record else {
        return String::new();
    };

    let content = seed(Some(record), S::fields(), &S::defaults());
    render_content(S::KEY, S::fields(), &content, options)
}
