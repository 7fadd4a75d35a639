//! # Marquee Editor
//!
//! Edit/save state machine shared by every section editor on the site.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ content API: SectionRecord (JSON)           │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: SectionEditor<S: SectionSchema>     │
//! │  - Seed content from record + defaults      │
//! │  - Locked / Editing mode                    │
//! │  - Field and list mutations                 │
//! │  - Save (normalize → SaveHandler) / cancel  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ render: EditableContent → preview HTML      │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Server authority**: a new record always re-seeds, never merges
//! 2. **Lock on success only**: a failed save keeps the user's edits
//! 3. **Positional list identity**: removing an item shifts later indices
//! 4. **Scoped previews**: local image URIs are released once superseded
//!
//! ## Usage
//!
//! ```rust,ignore
//! use marquee_editor::{MemorySaveHandler, SectionEditor};
//!
//! let mut editor = SectionEditor::<Testimonials>::new(record);
//! editor.begin_edit()?;
//! editor.append_list_item("cards")?;
//! editor.update_list_item("cards", 1, "name", "Jane Doe")?;
//! editor.save(&handler).await?;
//!
//! let html = editor.preview()?;
//! ```

mod dynamic;
mod editor;
mod errors;
mod image;
mod mode;
mod mutations;
mod notice;
mod persistence;
mod schema;

pub use dynamic::DynSectionEditor;
pub use editor::SectionEditor;
pub use errors::EditorError;
pub use image::{PreviewHandle, PreviewRegistry, SelectedFile, ValidationError, MAX_IMAGE_BYTES};
pub use mode::EditMode;
pub use mutations::{FieldMutation, MutationError};
pub use notice::{Notice, NoticeKind};
pub use persistence::{
    MemorySaveHandler, SaveError, SaveHandler, SaveReceipt, SaveRequest, UploadFile,
};
pub use schema::{build_payload, default_template, seed, SectionSchema};

// Re-export common types for convenience
pub use marquee_common::{EditableContent, FieldKind, FieldSpec, SectionRecord};
pub use marquee_render::RenderOptions;
