//! Storage abstraction trait
//!
//! This module defines the Storage trait that all storage backends must
//! implement, plus the transient value types that cross the boundary.

use async_trait::async_trait;
use bytes::Bytes;
use qrmedia_core::ResourceKind;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Provider returned an unexpected response: {0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// A validated upload, ready to hand to a storage backend.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub data: Bytes,
    pub filename: String,
    pub content_type: String,
}

impl UploadFile {
    /// Provider-side object name: the filename up to the first `.`.
    pub fn public_id(&self) -> &str {
        self.filename.split('.').next().unwrap_or(&self.filename)
    }
}

/// Reference to a durable, publicly readable object in external storage.
/// Only constructed after a successful upload.
#[derive(Debug, Clone)]
pub struct StoredMedia {
    /// Publicly accessible retrieval URL assigned by the provider
    pub public_url: String,
    /// Folder / namespace the object was stored under
    pub folder: String,
    /// How the provider classified the object
    pub resource_kind: ResourceKind,
}

/// Storage abstraction trait
///
/// All storage backends must implement this trait so the handlers never
/// couple to a specific provider.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Map a MIME type onto the resource classification this backend files
    /// the object under. Backends override this to express provider quirks.
    fn classify(&self, content_type: &str) -> ResourceKind {
        ResourceKind::from_content_type(content_type)
    }

    /// Upload a file into `folder` and return its public reference.
    ///
    /// The object is named from `file.public_id()`. Repeated uploads with the
    /// same filename may overwrite or collide; that behavior is owned by the
    /// provider. No retries are attempted: the first error is surfaced.
    async fn upload(&self, file: &UploadFile, folder: &str) -> StorageResult<StoredMedia>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_id_strips_everything_after_first_dot() {
        let file = UploadFile {
            data: Bytes::new(),
            filename: "holiday.photo.png".to_string(),
            content_type: "image/png".to_string(),
        };
        assert_eq!(file.public_id(), "holiday");
    }

    #[test]
    fn public_id_keeps_extensionless_names() {
        let file = UploadFile {
            data: Bytes::new(),
            filename: "README".to_string(),
            content_type: "application/octet-stream".to_string(),
        };
        assert_eq!(file.public_id(), "README");
    }
}
