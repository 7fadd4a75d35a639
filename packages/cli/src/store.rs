//! File-backed stand-in for the content API

use futures::future::BoxFuture;
use marquee_editor::{SaveError, SaveHandler, SaveReceipt, SaveRequest};
use std::path::PathBuf;

/// Writes payloads to `<root>/<section>.json` and uploads to
/// `<root>/assets/<section>/<file name>`
pub struct FileSaveHandler {
    root: PathBuf,
}

impl FileSaveHandler {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn payload_path(&self, section: &str) -> PathBuf {
        self.root.join(format!("{section}.json"))
    }
}

impl SaveHandler for FileSaveHandler {
    fn save(&self, request: SaveRequest) -> BoxFuture<'_, Result<SaveReceipt, SaveError>> {
        Box::pin(async move {
            tokio::fs::create_dir_all(&self.root).await?;

            let mut payload = request.payload;

            let mut receipt = SaveReceipt::default();
            if !request.files.is_empty() {
                let asset_dir = self.root.join("assets").join(&request.section);
                tokio::fs::create_dir_all(&asset_dir).await?;

                for upload in &request.files {
                    tokio::fs::write(asset_dir.join(&upload.file.name), &upload.file.bytes[..]).await?;
                    let durable = format!("assets/{}/{}", request.section, upload.file.name);
                    tracing::debug!(field = %upload.field, path = %durable, "stored upload");
                    // The stored record points at the asset, never at the local preview
                    if let Some(fields) = payload.as_object_mut() {
                        fields.remove(&upload.field);
                        fields.insert(upload.key.clone(), durable.clone().into());
                    }
                    receipt = receipt.with_durable_ref(upload.key.clone(), durable);
                }
            }

            let payload = serde_json::to_string_pretty(&payload)?;
            tokio::fs::write(self.payload_path(&request.section), payload).await?;

            Ok(receipt)
        })
    }
}
