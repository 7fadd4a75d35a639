//! Error types for the editor

use crate::image::ValidationError;
use crate::mutations::MutationError;
use crate::persistence::SaveError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Section '{0}' is locked; begin editing first")]
    Locked(&'static str),

    #[error("Section '{0}' has a save in flight")]
    SaveInFlight(&'static str),

    #[error("Section '{0}' has no save in flight")]
    NoSaveInFlight(&'static str),

    #[error("Preview of section '{0}' is unavailable while editing")]
    PreviewWhileEditing(&'static str),

    #[error("Field '{field}' of section '{section}' is not an image field")]
    NotAnImageField {
        section: &'static str,
        field: String,
    },

    #[error("Mutation error: {0}")]
    Mutation(#[from] MutationError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Save error: {0}")]
    Save(#[from] SaveError),
}
