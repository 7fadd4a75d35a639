//! Mutations replayed through an editor

mod common;

use common::{Services, Testimonials};
use marquee_editor::{
    EditorError, FieldMutation, MemorySaveHandler, MutationError, SectionEditor, SectionRecord,
    SelectedFile,
};
use serde_json::json;

fn editing<S: marquee_editor::SectionSchema>(value: serde_json::Value) -> SectionEditor<S> {
    let mut editor = SectionEditor::<S>::new(Some(SectionRecord::from_value(value).unwrap()));
    editor.begin_edit().unwrap();
    editor
}

#[test]
fn test_mutation_script_from_json() -> anyhow::Result<()> {
    let script = r#"[
        {"type": "setField", "field": "heading", "value": "Kind Words"},
        {"type": "appendListItem", "list": "cards"},
        {"type": "updateListItem", "list": "cards", "index": 0, "subfield": "name", "value": "Jane Doe"},
        {"type": "appendListItem", "list": "cards", "item": {"name": "Sam", "company": "Acme", "text": "Great"}}
    ]"#;
    let mutations: Vec<FieldMutation> = serde_json::from_str(script)?;

    let mut editor = editing::<Testimonials>(json!({}));
    for mutation in mutations {
        editor.apply(mutation)?;
    }

    let content = editor.content();
    assert_eq!(content.get_str("heading"), "Kind Words");
    assert_eq!(
        content.get("cards"),
        Some(&json!([
            {"name": "Jane Doe", "company": "Company Name", "text": "Testimonial text here..."},
            {"name": "Sam", "company": "Acme", "text": "Great"},
        ]))
    );
    Ok(())
}

#[test]
fn test_update_list_item_out_of_range() {
    let mut editor = editing::<Testimonials>(json!({
        "cards": [{"name": "A", "company": "B", "text": "C"}],
    }));

    let err = editor.update_list_item("cards", 1, "name", "Z").unwrap_err();

    assert!(matches!(
        err,
        EditorError::Mutation(MutationError::IndexOutOfRange { index: 1, len: 1, .. })
    ));
    assert_eq!(editor.content().list("cards").unwrap().len(), 1);
}

#[test]
fn test_remove_out_of_range() {
    let mut editor = editing::<Services>(json!({"tags": []}));

    let err = editor.remove_list_item("tags", 0).unwrap_err();

    assert!(matches!(
        err,
        EditorError::Mutation(MutationError::IndexOutOfRange { index: 0, len: 0, .. })
    ));
}

#[test]
fn test_malformed_card_cannot_be_merged() {
    let mut editor = editing::<Testimonials>(json!({"cards": ["not a card"]}));

    let err = editor.update_list_item("cards", 0, "name", "Z").unwrap_err();

    assert!(matches!(
        err,
        EditorError::Mutation(MutationError::NotAnObject { index: 0, .. })
    ));
}

#[test]
fn test_malformed_tags_degrade_to_empty_text() {
    let editor = SectionEditor::<Services>::new(Some(
        SectionRecord::from_value(json!({"tags": ["Planning", 7, {"label": "x"}]})).unwrap(),
    ));

    assert_eq!(
        editor.content().get("tags"),
        Some(&json!([{"text": "Planning"}, {"text": ""}, {"text": ""}]))
    );
}

#[test]
fn test_set_unknown_field() {
    let mut editor = editing::<Services>(json!({}));

    let err = editor.set_field("footer", "x").unwrap_err();

    assert!(matches!(
        err,
        EditorError::Mutation(MutationError::UnknownField(ref f)) if f == "footer"
    ));
}

#[test]
fn test_upload_descriptor_is_not_a_field() {
    let mut editor = editing::<Services>(json!({}));
    editor
        .select_image("image", SelectedFile::new("a.png", "image/png", vec![1u8; 4]))
        .unwrap();

    let err = editor.set_field("imageFile", "hijack").unwrap_err();

    assert!(matches!(
        err,
        EditorError::Mutation(MutationError::UnknownField(ref f)) if f == "imageFile"
    ));
    assert_eq!(editor.content().get("imageFile").unwrap()["name"], "a.png");
}

#[test]
fn test_scalar_fields_reject_structured_values() {
    let mut editor = editing::<Services>(json!({"heading": "Services"}));

    let err = editor.set_field("heading", json!({"x": 1})).unwrap_err();

    assert!(matches!(
        err,
        EditorError::Mutation(MutationError::ExpectedScalar(ref f)) if f == "heading"
    ));
    assert_eq!(editor.content().get_str("heading"), "Services");
}

#[tokio::test]
async fn test_explicit_image_value_supersedes_pending_upload() {
    let handler = MemorySaveHandler::new();
    let mut editor = editing::<Services>(json!({}));
    editor
        .select_image("image", SelectedFile::new("team.jpg", "image/jpeg", vec![1u8; 4]))
        .unwrap();

    editor.set_field("image", "/images/chosen.jpg").unwrap();

    assert!(!editor.content().contains("imageFile"));
    assert_eq!(editor.previews().live_count(), 0);

    editor.save(&handler).await.unwrap();

    let request = handler.last_request().unwrap();
    assert!(request.files.is_empty());
    assert_eq!(request.payload["image"], "/images/chosen.jpg");
    assert!(request.payload.get("imageFile").is_none());
    assert_eq!(editor.content().get_str("image"), "/images/chosen.jpg");
}
