use marquee_common::CommonError;
use marquee_editor::EditorError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SectionError {
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    #[error("Failed to load section record: {0}")]
    Load(#[from] CommonError),

    #[error("Editor error: {0}")]
    Editor(#[from] EditorError),
}
