//! Type-erased access to section editors, so a page can hold editors of
//! different section types side by side.

use crate::image::SelectedFile;
use crate::mode::EditMode;
use crate::notice::Notice;
use crate::persistence::SaveHandler;
use crate::schema::SectionSchema;
use crate::{EditorError, FieldMutation, SectionEditor};
use futures::future::BoxFuture;
use marquee_common::{EditableContent, SectionRecord};

/// Object-safe view of a [`SectionEditor`]
pub trait DynSectionEditor: Send {
    fn section(&self) -> &'static str;
    fn mode(&self) -> EditMode;
    fn content(&self) -> &EditableContent;
    fn receive_record(&mut self, record: Option<SectionRecord>);
    fn begin_edit(&mut self) -> Result<(), EditorError>;
    fn apply(&mut self, mutation: FieldMutation) -> Result<(), EditorError>;
    fn select_image(&mut self, key: &str, file: SelectedFile) -> Result<(), EditorError>;
    fn save<'a>(&'a mut self, handler: &'a dyn SaveHandler) -> BoxFuture<'a, Result<(), EditorError>>;
    fn cancel(&mut self) -> Result<(), EditorError>;
    fn preview(&self) -> Result<String, EditorError>;
    fn take_notices(&mut self) -> Vec<Notice>;
}

impl<S: SectionSchema> DynSectionEditor for SectionEditor<S> {
    fn section(&self) -> &'static str {
        SectionEditor::section(self)
    }

    fn mode(&self) -> EditMode {
        SectionEditor::mode(self)
    }

    fn content(&self) -> &EditableContent {
        SectionEditor::content(self)
    }

    fn receive_record(&mut self, record: Option<SectionRecord>) {
        SectionEditor::receive_record(self, record)
    }

    fn begin_edit(&mut self) -> Result<(), EditorError> {
        SectionEditor::begin_edit(self)
    }

    fn apply(&mut self, mutation: FieldMutation) -> Result<(), EditorError> {
        SectionEditor::apply(self, mutation)
    }

    fn select_image(&mut self, key: &str, file: SelectedFile) -> Result<(), EditorError> {
        SectionEditor::select_image(self, key, file)
    }

    fn save<'a>(&'a mut self, handler: &'a dyn SaveHandler) -> BoxFuture<'a, Result<(), EditorError>> {
        Box::pin(SectionEditor::save(self, handler))
    }

    fn cancel(&mut self) -> Result<(), EditorError> {
        SectionEditor::cancel(self)
    }

    fn preview(&self) -> Result<String, EditorError> {
        SectionEditor::preview(self)
    }

    fn take_notices(&mut self) -> Vec<Notice> {
        SectionEditor::take_notices(self)
    }
}
