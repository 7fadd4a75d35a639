use super::HEADING_AS_TITLE;
use marquee_editor::{build_payload, EditableContent, FieldKind, FieldSpec, SectionSchema};
use serde_json::{json, Value};

pub struct Expertise;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("heading", FieldKind::Heading),
    FieldSpec::new("tags", FieldKind::Tags),
];

impl SectionSchema for Expertise {
    const KEY: &'static str = "expertise";
    const TITLE: &'static str = "Expertise";

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn defaults() -> EditableContent {
        let mut defaults = EditableContent::new();
        defaults.set("heading", json!("Areas of Expertise"));
        defaults.set(
            "tags",
            json!(["Vendor Coordination", "Compliance", "Event Logistics"]),
        );
        defaults
    }

    fn payload(content: &EditableContent) -> Value {
        build_payload(FIELDS, content, HEADING_AS_TITLE)
    }
}
