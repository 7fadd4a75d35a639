use crate::registry::lookup;
use crate::SectionError;
use marquee_common::RecordSource;
use marquee_editor::{DynSectionEditor, PreviewRegistry};
use marquee_render::RenderOptions;

/// The editors hosted on one page.
///
/// Each section gets its own independent editor; the only thing they share is
/// the page's preview registry.
pub struct Page {
    previews: PreviewRegistry,
    editors: Vec<Box<dyn DynSectionEditor>>,
}

impl Page {
    /// Build editors for `keys`, seeding each from `source`
    pub fn load<'k>(
        source: &dyn RecordSource,
        keys: impl IntoIterator<Item = &'k str>,
        options: &RenderOptions,
    ) -> Result<Self, SectionError> {
        let previews = PreviewRegistry::new();
        let mut editors = Vec::new();

        for key in keys {
            let entry = lookup(key)?;
            let record = source.load(key)?;
            tracing::debug!(section = key, present = record.is_some(), "loading section editor");
            editors.push(entry.editor(record, previews.clone(), options.clone()));
        }

        Ok(Self { previews, editors })
    }

    pub fn sections(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.editors.iter().map(|e| e.section())
    }

    pub fn editor(&self, key: &str) -> Option<&dyn DynSectionEditor> {
        self.editors
            .iter()
            .find(|e| e.section() == key)
            .map(|e| e.as_ref())
    }

    pub fn editor_mut(&mut self, key: &str) -> Option<&mut (dyn DynSectionEditor + 'static)> {
        self.editors
            .iter_mut()
            .find(|e| e.section() == key)
            .map(|e| e.as_mut())
    }

    /// Re-seed one section from `source`, e.g. after the API confirmed a save
    pub fn refresh(&mut self, source: &dyn RecordSource, key: &str) -> Result<(), SectionError> {
        let record = source.load(key)?;
        let editor = self
            .editor_mut(key)
            .ok_or_else(|| SectionError::UnknownSection(key.to_string()))?;
        editor.receive_record(record);
        Ok(())
    }

    /// Preview markup of every locked section, in page order
    pub fn preview(&self) -> Result<String, SectionError> {
        let mut html = String::new();
        for editor in &self.editors {
            html.push_str(&editor.preview()?);
        }
        Ok(html)
    }

    pub fn previews(&self) -> &PreviewRegistry {
        &self.previews
    }
}
