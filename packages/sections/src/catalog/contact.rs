use marquee_editor::{build_payload, EditableContent, FieldKind, FieldSpec, SectionSchema};
use serde_json::{json, Value};

pub struct Contact;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("heading", FieldKind::Heading),
    FieldSpec::new("email", FieldKind::Label),
    FieldSpec::new("phone", FieldKind::Label),
    FieldSpec::new("address", FieldKind::Paragraph),
];

impl SectionSchema for Contact {
    const KEY: &'static str = "contact";
    const TITLE: &'static str = "Contact details";

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn defaults() -> EditableContent {
        let mut defaults = EditableContent::new();
        defaults.set("heading", json!("Contact Us"));
        defaults.set("email", json!("hello@example.com"));
        defaults.set("phone", json!("+1 (555) 010-0100"));
        defaults.set("address", json!("100 Main Street, Suite 200"));
        defaults
    }

    fn payload(content: &EditableContent) -> Value {
        build_payload(FIELDS, content, &[])
    }
}
