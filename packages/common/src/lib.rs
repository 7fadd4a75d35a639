//! # Marquee Common
//!
//! Value types shared by the section editor, the renderer and the CLI:
//! the server-owned [`SectionRecord`], the editor-local [`EditableContent`],
//! list item shapes and the field layout vocabulary.

pub mod content;
pub mod error;
pub mod list_item;
pub mod record;
pub mod result;
pub mod schema;
pub mod source;

pub use content::*;
pub use error::*;
pub use list_item::*;
pub use record::*;
pub use result::*;
pub use schema::*;
pub use source::*;
