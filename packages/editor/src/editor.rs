//! # Section Editor
//!
//! One editor owns the working copy of one section. It seeds the copy from
//! the inbound record, gates mutation behind [`EditMode`], forwards a
//! normalized payload to the injected [`SaveHandler`] and resets the copy on
//! cancel.
//!
//! ## Lifecycle
//!
//! ```text
//! record ─→ seed ─→ Locked ──begin_edit──→ Editing ──mutations──→ Editing
//!                     ↑                       │
//!                     ├──── save succeeded ───┤
//!                     └──── cancel (re-seed) ─┘
//! ```
//!
//! A failed save leaves the editor in `Editing` with its content untouched so
//! the user can retry. While a save is in flight every other operation is
//! refused with [`EditorError::SaveInFlight`].

use crate::image::{PreviewHandle, PreviewRegistry, SelectedFile};
use crate::mode::EditMode;
use crate::notice::Notice;
use crate::persistence::{SaveError, SaveHandler, SaveReceipt, SaveRequest, UploadFile};
use crate::schema::{seed, SectionSchema};
use crate::{EditorError, FieldMutation};
use marquee_common::{file_field, find_field, EditableContent, FieldKind, SectionRecord};
use marquee_render::{render_content, RenderOptions};
use serde_json::Value;
use std::collections::HashMap;
use std::marker::PhantomData;

/// Image selected during this edit, not yet confirmed by the content API
#[derive(Debug)]
struct PendingImage {
    file: SelectedFile,
    preview: PreviewHandle,
}

/// Generic editor for one section type
#[derive(Debug)]
pub struct SectionEditor<S: SectionSchema> {
    /// Last record supplied by the content API
    record: Option<SectionRecord>,

    /// Literal fallbacks, cached from the schema
    defaults: EditableContent,

    /// Working copy
    content: EditableContent,

    mode: EditMode,

    /// Set between `prepare_save` and `finish_save`
    saving: bool,

    /// Images awaiting upload, keyed by image field
    pending_images: HashMap<String, PendingImage>,

    /// Previews still shown after a save that returned no durable reference;
    /// released when the next record arrives
    retained_previews: Vec<PreviewHandle>,

    previews: PreviewRegistry,
    notices: Vec<Notice>,
    render_options: RenderOptions,
    _schema: PhantomData<S>,
}

impl<S: SectionSchema> SectionEditor<S> {
    /// Create an editor with its own preview registry
    pub fn new(record: Option<SectionRecord>) -> Self {
        Self::with_registry(record, PreviewRegistry::new())
    }

    /// Create an editor sharing a page-wide preview registry
    pub fn with_registry(record: Option<SectionRecord>, previews: PreviewRegistry) -> Self {
        let defaults = S::defaults();
        let content = seed(record.as_ref(), S::fields(), &defaults);

        Self {
            record,
            defaults,
            content,
            mode: EditMode::Locked,
            saving: false,
            pending_images: HashMap::new(),
            retained_previews: Vec::new(),
            previews,
            notices: Vec::new(),
            render_options: RenderOptions::default(),
            _schema: PhantomData,
        }
    }

    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    pub fn section(&self) -> &'static str {
        S::KEY
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn content(&self) -> &EditableContent {
        &self.content
    }

    pub fn record(&self) -> Option<&SectionRecord> {
        self.record.as_ref()
    }

    pub fn previews(&self) -> &PreviewRegistry {
        &self.previews
    }

    /// Replace the inbound record and re-seed the working copy.
    ///
    /// The store is replaced, never merged, and every local image preview
    /// is released. The edit mode is left as it is.
    pub fn receive_record(&mut self, record: Option<SectionRecord>) {
        tracing::debug!(section = S::KEY, present = record.is_some(), "received section record");
        self.record = record;
        self.reseed();
        self.retained_previews.clear();
    }

    /// `Locked → Editing`
    pub fn begin_edit(&mut self) -> Result<(), EditorError> {
        if self.saving {
            return Err(EditorError::SaveInFlight(S::KEY));
        }
        if self.mode.is_locked() {
            tracing::debug!(section = S::KEY, "edit mode: editing");
            self.mode = EditMode::Editing;
        }
        Ok(())
    }

    /// Apply one mutation to the working copy
    pub fn apply(&mut self, mutation: FieldMutation) -> Result<(), EditorError> {
        self.ensure_mutable()?;

        let mutation = match mutation {
            FieldMutation::AppendListItem { list, item: None } => {
                let item = S::list_template(&list);
                FieldMutation::AppendListItem { list, item }
            }
            other => other,
        };

        let spec = mutation.check_layout(S::fields())?;

        tracing::debug!(section = S::KEY, field = mutation.field(), "applying mutation");
        mutation.apply(&mut self.content)?;

        // An explicit value supersedes any file still waiting for upload
        if let FieldMutation::SetField { field, .. } = &mutation {
            if spec.kind == FieldKind::Image && self.pending_images.remove(field).is_some() {
                self.content.remove(&file_field(field));
            }
        }
        Ok(())
    }

    pub fn set_field(&mut self, field: &str, value: impl Into<Value>) -> Result<(), EditorError> {
        self.apply(FieldMutation::SetField {
            field: field.to_string(),
            value: value.into(),
        })
    }

    pub fn update_list_item(
        &mut self,
        list: &str,
        index: usize,
        subfield: &str,
        value: impl Into<Value>,
    ) -> Result<(), EditorError> {
        self.apply(FieldMutation::UpdateListItem {
            list: list.to_string(),
            index,
            subfield: subfield.to_string(),
            value: value.into(),
        })
    }

    /// Append the section's template item to `list`
    pub fn append_list_item(&mut self, list: &str) -> Result<(), EditorError> {
        self.apply(FieldMutation::AppendListItem {
            list: list.to_string(),
            item: None,
        })
    }

    /// Remove the item at `index`; later indices shift down
    pub fn remove_list_item(&mut self, list: &str, index: usize) -> Result<(), EditorError> {
        self.apply(FieldMutation::RemoveListItem {
            list: list.to_string(),
            index,
        })
    }

    /// Attach a user-selected image to an image field.
    ///
    /// Oversized files are refused with a validation notice and leave the
    /// content untouched. Otherwise the field points at a local preview URI
    /// and `${key}File` describes the file waiting for upload.
    pub fn select_image(&mut self, key: &str, file: SelectedFile) -> Result<(), EditorError> {
        self.ensure_mutable()?;

        match find_field(S::fields(), key) {
            Some(field) if field.kind == FieldKind::Image => {}
            _ => {
                return Err(EditorError::NotAnImageField {
                    section: S::KEY,
                    field: key.to_string(),
                })
            }
        }

        if let Err(err) = file.validate() {
            tracing::warn!(section = S::KEY, field = key, error = %err, "image rejected");
            self.notices.push(Notice::validation(err.to_string()));
            return Err(err.into());
        }

        let preview = self.previews.acquire(file.clone());
        self.content.set(key, Value::String(preview.uri().to_string()));
        self.content.set(file_field(key), file.descriptor());

        tracing::debug!(section = S::KEY, field = key, uri = preview.uri(), "image selected");
        // Replacing an earlier selection drops, and so releases, its preview
        self.pending_images
            .insert(key.to_string(), PendingImage { file, preview });

        Ok(())
    }

    /// First half of a save: build the request and mark the save in flight
    pub fn prepare_save(&mut self) -> Result<SaveRequest, EditorError> {
        self.ensure_mutable()?;

        let mut files: Vec<UploadFile> = self
            .pending_images
            .iter()
            .map(|(key, pending)| UploadFile {
                key: key.clone(),
                field: file_field(key),
                file: pending.file.clone(),
            })
            .collect();
        files.sort_by(|a, b| a.key.cmp(&b.key));

        self.saving = true;
        tracing::debug!(section = S::KEY, uploads = files.len(), "save in flight");

        Ok(SaveRequest {
            section: S::KEY.to_string(),
            payload: S::payload(&self.content),
            files,
        })
    }

    /// Second half of a save: settle the outcome reported by the handler.
    ///
    /// Success locks the editor but leaves the stored record alone; callers
    /// re-supply it through [`receive_record`](Self::receive_record) (or
    /// `Page::refresh`), otherwise a later cancel restores the pre-save seed.
    pub fn finish_save(
        &mut self,
        outcome: Result<SaveReceipt, SaveError>,
    ) -> Result<(), EditorError> {
        if !self.saving {
            return Err(EditorError::NoSaveInFlight(S::KEY));
        }
        self.saving = false;

        match outcome {
            Ok(receipt) => {
                self.settle_images(receipt);
                self.mode = EditMode::Locked;
                tracing::info!(section = S::KEY, "section saved");
                self.notices
                    .push(Notice::success(format!("{} updated successfully", S::TITLE)));
                Ok(())
            }
            Err(err) => {
                tracing::warn!(section = S::KEY, error = %err, "save failed");
                self.notices
                    .push(Notice::error(format!("Failed to update {}: {}", S::TITLE, err)));
                Err(err.into())
            }
        }
    }

    /// Save through `handler`, locking the editor only on success
    pub async fn save<H>(&mut self, handler: &H) -> Result<(), EditorError>
    where
        H: SaveHandler + ?Sized,
    {
        let request = self.prepare_save()?;
        let guard = SaveGuard { editor: self };
        let outcome = handler.save(request).await;
        guard.editor.finish_save(outcome)
    }

    /// Clear an in-flight save whose outcome will never arrive.
    ///
    /// The editor stays in `Editing` with its content and pending images, so
    /// the save can be retried.
    pub fn abandon_save(&mut self) {
        if self.saving {
            tracing::warn!(section = S::KEY, "save abandoned before completion");
            self.saving = false;
        }
    }

    /// Discard edits: re-seed from the original record and lock.
    ///
    /// Does nothing while already locked.
    pub fn cancel(&mut self) -> Result<(), EditorError> {
        if self.saving {
            return Err(EditorError::SaveInFlight(S::KEY));
        }
        if self.mode.is_locked() {
            return Ok(());
        }

        self.reseed();
        self.mode = EditMode::Locked;
        tracing::debug!(section = S::KEY, "edits discarded");
        self.notices.push(Notice::discard("Changes discarded"));
        Ok(())
    }

    /// Read-only markup of the current content; only while locked
    pub fn preview(&self) -> Result<String, EditorError> {
        if self.mode.is_editing() {
            return Err(EditorError::PreviewWhileEditing(S::KEY));
        }
        Ok(render_content(
            S::KEY,
            S::fields(),
            &self.content,
            &self.render_options,
        ))
    }

    /// Drain the notices raised since the last call
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn last_notice(&self) -> Option<&Notice> {
        self.notices.last()
    }

    fn ensure_mutable(&self) -> Result<(), EditorError> {
        if self.saving {
            return Err(EditorError::SaveInFlight(S::KEY));
        }
        if self.mode.is_locked() {
            return Err(EditorError::Locked(S::KEY));
        }
        Ok(())
    }

    fn reseed(&mut self) {
        self.content = seed(self.record.as_ref(), S::fields(), &self.defaults);
        self.pending_images.clear();
    }

    /// Swap confirmed uploads to their durable URL and drop local previews
    fn settle_images(&mut self, receipt: SaveReceipt) {
        for (key, pending) in std::mem::take(&mut self.pending_images) {
            self.content.remove(&file_field(&key));

            match receipt.durable_refs.get(&key) {
                Some(url) => {
                    self.content.set(key.as_str(), Value::String(url.clone()));
                    // `pending.preview` drops here, releasing the local URI
                }
                None => self.retained_previews.push(pending.preview),
            }
        }
    }
}

/// Releases the in-flight flag if a save future is dropped before it settles
struct SaveGuard<'e, S: SectionSchema> {
    editor: &'e mut SectionEditor<S>,
}

impl<S: SectionSchema> Drop for SaveGuard<'_, S> {
    fn drop(&mut self) {
        self.editor.abandon_save();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemorySaveHandler;
    use crate::schema::build_payload;
    use crate::NoticeKind;
    use marquee_common::FieldSpec;
    use serde_json::json;

    struct Gallery;

    const GALLERY_FIELDS: &[FieldSpec] = &[
        FieldSpec::new("heading", FieldKind::Heading),
        FieldSpec::new("image", FieldKind::Image),
        FieldSpec::new("tags", FieldKind::Tags),
    ];

    impl SectionSchema for Gallery {
        const KEY: &'static str = "gallery";
        const TITLE: &'static str = "Gallery";

        fn fields() -> &'static [FieldSpec] {
            GALLERY_FIELDS
        }

        fn defaults() -> EditableContent {
            let mut defaults = EditableContent::new();
            defaults.set("heading", json!("Gallery"));
            defaults.set("image", json!("/images/default.jpg"));
            defaults.set("tags", json!([]));
            defaults
        }

        fn payload(content: &EditableContent) -> Value {
            build_payload(GALLERY_FIELDS, content, &[("heading", "title")])
        }
    }

    fn image(size: usize) -> SelectedFile {
        SelectedFile::new("photo.png", "image/png", vec![7u8; size])
    }

    #[test]
    fn test_editor_starts_locked() {
        let editor = SectionEditor::<Gallery>::new(None);

        assert_eq!(editor.mode(), EditMode::Locked);
        assert_eq!(editor.section(), "gallery");
        assert_eq!(editor.content().get_str("heading"), "Gallery");
    }

    #[test]
    fn test_mutations_refused_while_locked() {
        let mut editor = SectionEditor::<Gallery>::new(None);

        let err = editor.set_field("heading", "New").unwrap_err();
        assert!(matches!(err, EditorError::Locked("gallery")));

        let err = editor.append_list_item("tags").unwrap_err();
        assert!(matches!(err, EditorError::Locked("gallery")));
        assert_eq!(editor.content().get_str("heading"), "Gallery");
    }

    #[test]
    fn test_append_uses_schema_template() {
        let mut editor = SectionEditor::<Gallery>::new(None);
        editor.begin_edit().unwrap();

        editor.append_list_item("tags").unwrap();

        assert_eq!(editor.content().get("tags"), Some(&json!([{"text": ""}])));
    }

    #[test]
    fn test_append_to_scalar_has_no_template() {
        let mut editor = SectionEditor::<Gallery>::new(None);
        editor.begin_edit().unwrap();

        let err = editor.append_list_item("heading").unwrap_err();
        assert!(matches!(err, EditorError::Mutation(_)));
    }

    #[test]
    fn test_preview_only_while_locked() {
        let mut editor = SectionEditor::<Gallery>::new(None);
        assert!(editor.preview().unwrap().contains("Gallery"));

        editor.begin_edit().unwrap();
        assert!(matches!(
            editor.preview(),
            Err(EditorError::PreviewWhileEditing("gallery"))
        ));
    }

    #[test]
    fn test_select_image_sets_preview_and_file_fields() {
        let mut editor = SectionEditor::<Gallery>::new(None);
        editor.begin_edit().unwrap();

        editor.select_image("image", image(16)).unwrap();

        let uri = editor.content().get_str("image").to_string();
        assert!(uri.starts_with("blob:marquee/"));
        assert!(editor.previews().is_live(&uri));
        assert_eq!(editor.content().get("imageFile").unwrap()["name"], "photo.png");
    }

    #[test]
    fn test_oversized_image_is_rejected_without_changes() {
        let mut editor = SectionEditor::<Gallery>::new(None);
        editor.begin_edit().unwrap();
        let before = editor.content().clone();

        let err = editor.select_image("image", image(2 * 1024 * 1024)).unwrap_err();

        assert!(matches!(err, EditorError::Validation(_)));
        assert_eq!(editor.content(), &before);
        assert!(!editor.content().contains("imageFile"));
        assert_eq!(editor.last_notice().map(|n| n.kind), Some(NoticeKind::Validation));
        assert_eq!(editor.previews().live_count(), 0);
    }

    #[test]
    fn test_select_image_rejects_non_image_fields() {
        let mut editor = SectionEditor::<Gallery>::new(None);
        editor.begin_edit().unwrap();

        let err = editor.select_image("heading", image(1)).unwrap_err();
        assert!(matches!(err, EditorError::NotAnImageField { .. }));
    }

    #[test]
    fn test_reselecting_image_releases_previous_preview() {
        let mut editor = SectionEditor::<Gallery>::new(None);
        editor.begin_edit().unwrap();

        editor.select_image("image", image(1)).unwrap();
        let first = editor.content().get_str("image").to_string();
        editor.select_image("image", image(2)).unwrap();

        assert!(!editor.previews().is_live(&first));
        assert_eq!(editor.previews().live_count(), 1);
    }

    #[test]
    fn test_operations_refused_while_save_in_flight() {
        let mut editor = SectionEditor::<Gallery>::new(None);
        editor.begin_edit().unwrap();
        editor.prepare_save().unwrap();

        assert!(matches!(editor.prepare_save(), Err(EditorError::SaveInFlight(_))));
        assert!(matches!(editor.set_field("heading", "x"), Err(EditorError::SaveInFlight(_))));
        assert!(matches!(editor.cancel(), Err(EditorError::SaveInFlight(_))));
        assert!(matches!(editor.begin_edit(), Err(EditorError::SaveInFlight(_))));
        assert!(editor.is_saving());

        editor.finish_save(Ok(SaveReceipt::default())).unwrap();
        assert!(!editor.is_saving());
        assert_eq!(editor.mode(), EditMode::Locked);
    }

    #[test]
    fn test_finish_without_prepare_fails() {
        let mut editor = SectionEditor::<Gallery>::new(None);

        let err = editor.finish_save(Ok(SaveReceipt::default())).unwrap_err();
        assert!(matches!(err, EditorError::NoSaveInFlight("gallery")));
    }

    #[tokio::test]
    async fn test_save_swaps_preview_for_durable_reference() {
        let handler = MemorySaveHandler::with_asset_base("https://cdn.example.com");
        let mut editor = SectionEditor::<Gallery>::new(None);
        editor.begin_edit().unwrap();
        editor.select_image("image", image(8)).unwrap();
        let local = editor.content().get_str("image").to_string();

        editor.save(&handler).await.unwrap();

        assert_eq!(
            editor.content().get_str("image"),
            "https://cdn.example.com/gallery/photo.png"
        );
        assert!(!editor.content().contains("imageFile"));
        assert!(!editor.previews().is_live(&local));

        let request = handler.last_request().unwrap();
        assert_eq!(request.files.len(), 1);
        assert_eq!(request.files[0].field, "imageFile");
        assert_eq!(request.payload["title"], "Gallery");
    }

    #[test]
    fn test_preview_without_durable_reference_lives_until_next_record() {
        let mut editor = SectionEditor::<Gallery>::new(None);
        editor.begin_edit().unwrap();
        editor.select_image("image", image(8)).unwrap();
        let local = editor.content().get_str("image").to_string();

        editor.prepare_save().unwrap();
        editor.finish_save(Ok(SaveReceipt::default())).unwrap();

        assert_eq!(editor.content().get_str("image"), local);
        assert!(editor.previews().is_live(&local));

        editor.receive_record(Some(
            SectionRecord::from_value(json!({"image": "https://cdn.example.com/final.png"})).unwrap(),
        ));

        assert!(!editor.previews().is_live(&local));
        assert_eq!(editor.content().get_str("image"), "https://cdn.example.com/final.png");
    }

    #[test]
    fn test_cancel_releases_pending_previews() {
        let mut editor = SectionEditor::<Gallery>::new(None);
        editor.begin_edit().unwrap();
        editor.select_image("image", image(8)).unwrap();

        editor.cancel().unwrap();

        assert_eq!(editor.previews().live_count(), 0);
        assert_eq!(editor.content().get_str("image"), "/images/default.jpg");
        assert!(!editor.content().contains("imageFile"));
    }

    #[test]
    fn test_dropping_editor_releases_previews() {
        let registry = PreviewRegistry::new();
        {
            let mut editor = SectionEditor::<Gallery>::with_registry(None, registry.clone());
            editor.begin_edit().unwrap();
            editor.select_image("image", image(8)).unwrap();
            assert_eq!(registry.live_count(), 1);
        }
        assert_eq!(registry.live_count(), 0);
    }

    struct Stalled;

    impl SaveHandler for Stalled {
        fn save(&self, _request: SaveRequest) -> futures::future::BoxFuture<'_, Result<SaveReceipt, SaveError>> {
            Box::pin(futures::future::pending())
        }
    }

    #[test]
    fn test_dropped_save_releases_in_flight_flag() {
        use futures::FutureExt;

        let mut editor = SectionEditor::<Gallery>::new(None);
        editor.begin_edit().unwrap();
        editor.set_field("heading", "Draft").unwrap();

        assert!(editor.save(&Stalled).now_or_never().is_none());

        assert!(!editor.is_saving());
        assert_eq!(editor.mode(), EditMode::Editing);
        assert_eq!(editor.content().get_str("heading"), "Draft");
        editor.set_field("heading", "Retry").unwrap();
    }

    #[test]
    fn test_abandon_save_after_prepare() {
        let mut editor = SectionEditor::<Gallery>::new(None);
        editor.begin_edit().unwrap();
        editor.prepare_save().unwrap();

        editor.abandon_save();

        assert!(!editor.is_saving());
        assert!(matches!(
            editor.finish_save(Ok(SaveReceipt::default())),
            Err(EditorError::NoSaveInFlight("gallery"))
        ));
        editor.cancel().unwrap();
        assert_eq!(editor.mode(), EditMode::Locked);
    }
}
