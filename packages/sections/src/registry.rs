//! Lookup of section types by the key the content API uses.

use crate::catalog::{About, Contact, Cta, Expertise, Hero, Mission, Services, Testimonials};
use crate::display::display;
use crate::SectionError;
use marquee_common::{FieldSpec, SectionRecord};
use marquee_editor::{DynSectionEditor, PreviewRegistry, SectionEditor, SectionSchema};
use marquee_render::RenderOptions;

/// Type-erased constructors for one section type
#[derive(Clone, Copy)]
pub struct SectionEntry {
    pub key: &'static str,
    pub title: &'static str,
    pub fields: fn() -> &'static [FieldSpec],
    editor: fn(Option<SectionRecord>, PreviewRegistry, RenderOptions) -> Box<dyn DynSectionEditor>,
    display: fn(Option<&SectionRecord>, &RenderOptions) -> String,
}

impl SectionEntry {
    const fn of<S: SectionSchema>() -> Self {
        Self {
            key: S::KEY,
            title: S::TITLE,
            fields: S::fields,
            editor: make_editor::<S>,
            display: display::<S>,
        }
    }

    /// New editor for this section type
    pub fn editor(
        &self,
        record: Option<SectionRecord>,
        previews: PreviewRegistry,
        options: RenderOptions,
    ) -> Box<dyn DynSectionEditor> {
        (self.editor)(record, previews, options)
    }

    /// Public display markup; empty when there is no record
    pub fn display(&self, record: Option<&SectionRecord>, options: &RenderOptions) -> String {
        (self.display)(record, options)
    }
}

impl std::fmt::Debug for SectionEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SectionEntry")
            .field("key", &self.key)
            .field("title", &self.title)
            .finish()
    }
}

fn make_editor<S: SectionSchema>(
    record: Option<SectionRecord>,
    previews: PreviewRegistry,
    options: RenderOptions,
) -> Box<dyn DynSectionEditor> {
    Box::new(SectionEditor::<S>::with_registry(record, previews).with_render_options(options))
}

/// Every section on the site, in page order
static SECTIONS: &[SectionEntry] = &[
    SectionEntry::of::<Hero>(),
    SectionEntry::of::<Mission>(),
    SectionEntry::of::<About>(),
    SectionEntry::of::<Services>(),
    SectionEntry::of::<Expertise>(),
    SectionEntry::of::<Testimonials>(),
    SectionEntry::of::<Cta>(),
    SectionEntry::of::<Contact>(),
];

/// Section keys in page order
pub fn section_keys() -> impl Iterator<Item = &'static str> {
    SECTIONS.iter().map(|entry| entry.key)
}

pub fn entries() -> &'static [SectionEntry] {
    SECTIONS
}

/// Find a section type by key
pub fn lookup(key: &str) -> Result<&'static SectionEntry, SectionError> {
    SECTIONS
        .iter()
        .find(|entry| entry.key == key)
        .ok_or_else(|| SectionError::UnknownSection(key.to_string()))
}
