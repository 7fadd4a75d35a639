use super::HEADING_AS_TITLE;
use marquee_editor::{build_payload, EditableContent, FieldKind, FieldSpec, SectionSchema};
use serde_json::{json, Value};

/// Landing banner at the top of every brand page
pub struct Hero;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("heading", FieldKind::Heading),
    FieldSpec::new("subheading", FieldKind::Subheading),
    FieldSpec::new("ctaLabel", FieldKind::Label),
    FieldSpec::new("image", FieldKind::Image),
];

impl SectionSchema for Hero {
    const KEY: &'static str = "hero";
    const TITLE: &'static str = "Hero section";

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn defaults() -> EditableContent {
        let mut defaults = EditableContent::new();
        defaults.set("heading", json!("Professional Services You Can Rely On"));
        defaults.set(
            "subheading",
            json!("Strategy, coordination and delivery across every brand we represent."),
        );
        defaults.set("ctaLabel", json!("Get in Touch"));
        defaults.set("image", json!("/images/hero.jpg"));
        defaults
    }

    fn payload(content: &EditableContent) -> Value {
        build_payload(FIELDS, content, HEADING_AS_TITLE)
    }
}
