//! In-memory storage backend.
//!
//! Used by tests and local development: uploads are recorded in memory and
//! given deterministic fake URLs, so integration tests can assert exactly
//! when the external provider would have been contacted.

use std::sync::Mutex;

use async_trait::async_trait;
use qrmedia_core::ResourceKind;

use crate::traits::{Storage, StorageResult, StoredMedia, UploadFile};

/// One recorded upload.
#[derive(Debug, Clone)]
pub struct RecordedUpload {
    pub filename: String,
    pub content_type: String,
    pub folder: String,
    pub size: usize,
    pub resource_kind: ResourceKind,
    pub public_url: String,
}

/// In-memory storage implementation
pub struct MemoryStorage {
    base_url: String,
    uploads: Mutex<Vec<RecordedUpload>>,
}

impl MemoryStorage {
    pub fn new(base_url: impl Into<String>) -> Self {
        MemoryStorage {
            base_url: base_url.into(),
            uploads: Mutex::new(Vec::new()),
        }
    }

    /// Number of uploads this backend has accepted.
    pub fn upload_count(&self) -> usize {
        self.uploads.lock().expect("uploads lock poisoned").len()
    }

    /// Snapshot of all recorded uploads, in order.
    pub fn uploads(&self) -> Vec<RecordedUpload> {
        self.uploads.lock().expect("uploads lock poisoned").clone()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn upload(&self, file: &UploadFile, folder: &str) -> StorageResult<StoredMedia> {
        let resource_kind = self.classify(&file.content_type);
        let public_url = format!("{}/{}/{}", self.base_url, folder, file.public_id());

        let record = RecordedUpload {
            filename: file.filename.clone(),
            content_type: file.content_type.clone(),
            folder: folder.to_string(),
            size: file.data.len(),
            resource_kind,
            public_url: public_url.clone(),
        };
        self.uploads
            .lock()
            .expect("uploads lock poisoned")
            .push(record);

        Ok(StoredMedia {
            public_url,
            folder: folder.to_string(),
            resource_kind,
        })
    }
}
