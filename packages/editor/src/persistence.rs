//! # Persistence Bridge
//!
//! The content API is reached through an injected [`SaveHandler`]. Editors
//! build a [`SaveRequest`] (normalized payload plus any image files waiting
//! for upload) and hand it over; the handler either resolves with a
//! [`SaveReceipt`] or fails with a [`SaveError`].

use crate::image::SelectedFile;
use futures::future::BoxFuture;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SaveError {
    #[error("Content API rejected the save: {0}")]
    Rejected(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Image file travelling with a save
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    /// Image field the file belongs to (`image`)
    pub key: String,
    /// Multipart field name (`imageFile`)
    pub field: String,
    pub file: SelectedFile,
}

/// Everything the content API needs to persist one section
#[derive(Debug, Clone, PartialEq)]
pub struct SaveRequest {
    pub section: String,
    pub payload: Value,
    pub files: Vec<UploadFile>,
}

/// What the content API reports back after a save.
///
/// Nothing is required: an empty receipt is a plain success. When uploads
/// were involved the API may report the durable URL for each image field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveReceipt {
    /// Image field → durable URL
    pub durable_refs: HashMap<String, String>,
}

impl SaveReceipt {
    pub fn with_durable_ref(mut self, key: impl Into<String>, url: impl Into<String>) -> Self {
        self.durable_refs.insert(key.into(), url.into());
        self
    }
}

/// Asynchronous save operation injected into editors
pub trait SaveHandler: Send + Sync {
    fn save(&self, request: SaveRequest) -> BoxFuture<'_, Result<SaveReceipt, SaveError>>;
}

#[derive(Debug, Default)]
struct MemoryState {
    saved: HashMap<String, Value>,
    requests: Vec<SaveRequest>,
    fail_next: Option<String>,
}

/// In-memory content API for testing.
///
/// Uploaded files get a durable URL under `asset_base`.
#[derive(Debug)]
pub struct MemorySaveHandler {
    asset_base: String,
    state: Mutex<MemoryState>,
}

impl MemorySaveHandler {
    pub fn new() -> Self {
        Self::with_asset_base("https://assets.local")
    }

    pub fn with_asset_base(asset_base: impl Into<String>) -> Self {
        Self {
            asset_base: asset_base.into(),
            state: Mutex::new(MemoryState::default()),
        }
    }

    /// Make the next save fail with [`SaveError::Rejected`]
    pub fn fail_next(&self, reason: impl Into<String>) {
        self.lock().fail_next = Some(reason.into());
    }

    /// Last payload persisted for a section
    pub fn saved(&self, section: &str) -> Option<Value> {
        self.lock().saved.get(section).cloned()
    }

    /// Number of save calls received, failed ones included
    pub fn request_count(&self) -> usize {
        self.lock().requests.len()
    }

    pub fn last_request(&self) -> Option<SaveRequest> {
        self.lock().requests.last().cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemorySaveHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl SaveHandler for MemorySaveHandler {
    fn save(&self, request: SaveRequest) -> BoxFuture<'_, Result<SaveReceipt, SaveError>> {
        let outcome = {
            let mut state = self.lock();
            state.requests.push(request.clone());

            match state.fail_next.take() {
                Some(reason) => Err(SaveError::Rejected(reason)),
                None => {
                    state.saved.insert(request.section.clone(), request.payload);
                    let receipt = request.files.iter().fold(SaveReceipt::default(), |receipt, upload| {
                        receipt.with_durable_ref(
                            upload.key.clone(),
                            format!("{}/{}/{}", self.asset_base, request.section, upload.file.name),
                        )
                    });
                    Ok(receipt)
                }
            }
        };

        Box::pin(async move { outcome })
    }
}
