//! # Image Selection
//!
//! Selected files are size-checked, then exposed to the preview through a
//! local URI issued by a [`PreviewRegistry`]. The URI only lives as long as
//! its [`PreviewHandle`]: dropping the handle releases it. Editors drop their
//! handles once the content API has confirmed a durable reference, when edits
//! are discarded, when a new record arrives, or when the editor goes away.

use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use thiserror::Error;

/// Largest image a user may select (1 MiB)
pub const MAX_IMAGE_BYTES: u64 = 1024 * 1024;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("'{name}' is {size} bytes; images must be at most {limit} bytes")]
    FileTooLarge { name: String, size: u64, limit: u64 },
}

/// A file chosen by the user, held until the save path uploads it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub mime: String,
    pub bytes: Arc<[u8]>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            bytes: bytes.into(),
        }
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Reject files above [`MAX_IMAGE_BYTES`]
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.size() > MAX_IMAGE_BYTES {
            return Err(ValidationError::FileTooLarge {
                name: self.name.clone(),
                size: self.size(),
                limit: MAX_IMAGE_BYTES,
            });
        }
        Ok(())
    }

    /// JSON descriptor stored under `${key}File` in editable content
    pub fn descriptor(&self) -> Value {
        json!({
            "name": self.name,
            "mime": self.mime,
            "size": self.size(),
        })
    }
}

#[derive(Debug, Default)]
struct RegistryInner {
    next_id: AtomicU64,
    entries: Mutex<HashMap<String, SelectedFile>>,
}

/// Issues session-local preview URIs for selected files.
///
/// Cloning shares the same registry; one page typically hands a single
/// registry to all of its editors.
#[derive(Debug, Clone, Default)]
pub struct PreviewRegistry {
    inner: Arc<RegistryInner>,
}

impl PreviewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a file and return the handle that keeps its URI alive
    pub fn acquire(&self, file: SelectedFile) -> PreviewHandle {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let uri = format!("blob:marquee/{id}");

        self.inner
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(uri.clone(), file);

        PreviewHandle {
            uri,
            registry: self.clone(),
        }
    }

    /// Look up the file behind a live preview URI
    pub fn resolve(&self, uri: &str) -> Option<SelectedFile> {
        self.inner
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(uri)
            .cloned()
    }

    pub fn is_live(&self, uri: &str) -> bool {
        self.inner
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(uri)
    }

    /// Number of URIs currently held
    pub fn live_count(&self) -> usize {
        self.inner
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn release(&self, uri: &str) {
        self.inner
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(uri);
    }
}

/// Owner of one preview URI; releases it on drop
#[derive(Debug)]
pub struct PreviewHandle {
    uri: String,
    registry: PreviewRegistry,
}

impl PreviewHandle {
    pub fn uri(&self) -> &str {
        &self.uri
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        tracing::trace!(uri = %self.uri, "releasing image preview");
        self.registry.release(&self.uri);
    }
}
