//! # Marquee Sections
//!
//! The concrete sections of the marketing site. Each section is a
//! [`SectionSchema`](marquee_editor::SectionSchema) with its own layout,
//! literal defaults and payload shape; the [`registry`] looks them up by the
//! key the content API uses.

pub mod catalog;
mod display;
mod error;
mod page;
pub mod registry;

pub use catalog::{About, Contact, Cta, Expertise, Hero, Mission, Services, Testimonials};
pub use display::display;
pub use error::SectionError;
pub use page::Page;
pub use registry::{lookup, section_keys, SectionEntry};
