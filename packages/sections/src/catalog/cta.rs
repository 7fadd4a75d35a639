use super::HEADING_AS_TITLE;
use marquee_editor::{build_payload, EditableContent, FieldKind, FieldSpec, SectionSchema};
use serde_json::{json, Value};

/// Closing call to action
pub struct Cta;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("heading", FieldKind::Heading),
    FieldSpec::new("paragraph", FieldKind::Paragraph),
    FieldSpec::new("buttonLabel", FieldKind::Label),
];

impl SectionSchema for Cta {
    const KEY: &'static str = "cta";
    const TITLE: &'static str = "Call to action";

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn defaults() -> EditableContent {
        let mut defaults = EditableContent::new();
        defaults.set("heading", json!("Ready to Start Your Project?"));
        defaults.set("paragraph", json!("Tell us what you need and we will take it from there."));
        defaults.set("buttonLabel", json!("Contact Us"));
        defaults
    }

    fn payload(content: &EditableContent) -> Value {
        build_payload(FIELDS, content, HEADING_AS_TITLE)
    }
}
