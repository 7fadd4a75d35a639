use super::HEADING_AS_TITLE;
use marquee_editor::{build_payload, EditableContent, FieldKind, FieldSpec, SectionSchema};
use serde_json::{json, Value};

pub struct About;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("heading", FieldKind::Heading),
    FieldSpec::new("paragraph", FieldKind::Paragraph),
    FieldSpec::new("image", FieldKind::Image),
];

impl SectionSchema for About {
    const KEY: &'static str = "about";
    const TITLE: &'static str = "About section";

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn defaults() -> EditableContent {
        let mut defaults = EditableContent::new();
        defaults.set("heading", json!("About Us"));
        defaults.set(
            "paragraph",
            json!("A team of consultants, coordinators and specialists working as one."),
        );
        defaults.set("image", json!("/images/about.jpg"));
        defaults
    }

    fn payload(content: &EditableContent) -> Value {
        build_payload(FIELDS, content, HEADING_AS_TITLE)
    }
}
