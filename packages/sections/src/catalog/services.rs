use marquee_editor::{build_payload, EditableContent, FieldKind, FieldSpec, SectionSchema};
use serde_json::{json, Value};

pub struct Services;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("heading", FieldKind::Heading),
    FieldSpec::new("paragraph", FieldKind::Paragraph),
    FieldSpec::new("tags", FieldKind::Tags),
];

impl SectionSchema for Services {
    const KEY: &'static str = "services";
    const TITLE: &'static str = "Services";

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn defaults() -> EditableContent {
        let mut defaults = EditableContent::new();
        defaults.set("heading", json!("What We Do"));
        defaults.set("paragraph", json!("End-to-end support for every stage of your project."));
        defaults.set(
            "tags",
            json!(["Vendor Coordination", "Project Management", "Budget Planning"]),
        );
        defaults
    }

    // Services keeps its `heading` key; only the tag list is flattened
    fn payload(content: &EditableContent) -> Value {
        build_payload(FIELDS, content, &[])
    }
}
