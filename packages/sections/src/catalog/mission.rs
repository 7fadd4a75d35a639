use super::HEADING_AS_TITLE;
use marquee_editor::{build_payload, EditableContent, FieldKind, FieldSpec, SectionSchema};
use serde_json::{json, Value};

pub struct Mission;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("heading", FieldKind::Heading),
    FieldSpec::new("paragraph", FieldKind::Paragraph),
];

impl SectionSchema for Mission {
    const KEY: &'static str = "mission";
    const TITLE: &'static str = "Mission";

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn defaults() -> EditableContent {
        let mut defaults = EditableContent::new();
        defaults.set("heading", json!("Our Mission"));
        defaults.set(
            "paragraph",
            json!("We help organizations plan, coordinate and deliver projects with confidence."),
        );
        defaults
    }

    fn payload(content: &EditableContent) -> Value {
        build_payload(FIELDS, content, HEADING_AS_TITLE)
    }
}
