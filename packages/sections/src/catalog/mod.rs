//! Section definitions, one module per section type

mod about;
mod contact;
mod cta;
mod expertise;
mod hero;
mod mission;
mod services;
mod testimonials;

pub use about::About;
pub use contact::Contact;
pub use cta::Cta;
pub use expertise::Expertise;
pub use hero::Hero;
pub use mission::Mission;
pub use services::Services;
pub use testimonials::Testimonials;

/// Most sections publish their heading as `title`
pub(crate) const HEADING_AS_TITLE: &[(&str, &str)] = &[("heading", "title")];
