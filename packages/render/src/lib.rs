//! # Marquee Render
//!
//! Read-only HTML rendering of section content. Used both by public display
//! sections and by the editor's preview, so the two never drift apart.

mod html;


pub use html::{escape_html, render_content, RenderOptions};
