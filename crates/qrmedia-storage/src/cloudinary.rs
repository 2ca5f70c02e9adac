//! Cloudinary storage backend.
//!
//! Uploads go to `POST https://api.cloudinary.com/v1_1/{cloud}/{bucket}/upload`
//! as signed multipart requests. The provider files objects into one of four
//! buckets (`image`, `video`, `raw`, `auto`); note that audio is filed under
//! `video` - a Cloudinary convention, kept here for URL compatibility.

use async_trait::async_trait;
use qrmedia_core::ResourceKind;
use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::traits::{Storage, StorageError, StorageResult, StoredMedia, UploadFile};

const UPLOAD_BASE_URL: &str = "https://api.cloudinary.com/v1_1";

/// Cloudinary storage implementation
#[derive(Clone)]
pub struct CloudinaryStorage {
    client: reqwest::Client,
    cloud_name: String,
    api_key: String,
    api_secret: String,
}

/// Subset of the provider's upload response we care about.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
}

impl CloudinaryStorage {
    pub fn new(cloud_name: String, api_key: String, api_secret: String) -> Self {
        CloudinaryStorage {
            client: reqwest::Client::new(),
            cloud_name,
            api_key,
            api_secret,
        }
    }

    /// URL path segment for the provider's resource bucket.
    fn bucket(kind: ResourceKind) -> &'static str {
        match kind {
            ResourceKind::Image => "image",
            // Cloudinary has no audio bucket; audio lives under video.
            ResourceKind::Video | ResourceKind::Audio => "video",
            ResourceKind::Raw => "auto",
        }
    }

    /// Parameter string Cloudinary expects to be signed: the signed fields in
    /// alphabetical order, joined with `&`, excluding `file` and `api_key`.
    fn signature_payload(folder: &str, public_id: &str, timestamp: i64) -> String {
        format!(
            "access_mode=public&folder={}&public_id={}&timestamp={}",
            folder, public_id, timestamp
        )
    }

    fn sign(&self, payload: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(payload.as_bytes());
        hasher.update(self.api_secret.as_bytes());
        hex::encode(hasher.finalize())
    }
}

#[async_trait]
impl Storage for CloudinaryStorage {
    fn classify(&self, content_type: &str) -> ResourceKind {
        match ResourceKind::from_content_type(content_type) {
            // Provider quirk: audio uploads go through the video pipeline.
            ResourceKind::Audio => ResourceKind::Video,
            kind => kind,
        }
    }

    async fn upload(&self, file: &UploadFile, folder: &str) -> StorageResult<StoredMedia> {
        let resource_kind = self.classify(&file.content_type);
        let public_id = file.public_id().to_string();
        let timestamp = chrono::Utc::now().timestamp();
        let signature = self.sign(&Self::signature_payload(folder, &public_id, timestamp));

        let url = format!(
            "{}/{}/{}/upload",
            UPLOAD_BASE_URL,
            self.cloud_name,
            Self::bucket(resource_kind)
        );

        let part = reqwest::multipart::Part::bytes(file.data.to_vec())
            .file_name(file.filename.clone())
            .mime_str(&file.content_type)
            .map_err(|e| {
                StorageError::UploadFailed(format!("invalid content type for upload: {}", e))
            })?;
        let form = reqwest::multipart::Form::new()
            .text("api_key", self.api_key.clone())
            .text("timestamp", timestamp.to_string())
            .text("signature", signature)
            .text("public_id", public_id)
            .text("folder", folder.to_string())
            .text("access_mode", "public")
            .part("file", part);

        tracing::debug!(
            filename = %file.filename,
            folder = %folder,
            bucket = Self::bucket(resource_kind),
            "Uploading file to Cloudinary"
        );

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| StorageError::UploadFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StorageError::UploadFailed(format!(
                "provider returned {}: {}",
                status, body
            )));
        }

        let parsed: UploadResponse = response
            .json()
            .await
            .map_err(|e| StorageError::InvalidResponse(e.to_string()))?;

        Ok(StoredMedia {
            public_url: parsed.secure_url,
            folder: folder.to_string(),
            resource_kind,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage() -> CloudinaryStorage {
        CloudinaryStorage::new(
            "demo".to_string(),
            "key".to_string(),
            "secret".to_string(),
        )
    }

    #[test]
    fn audio_is_filed_under_the_video_bucket() {
        let storage = storage();
        assert_eq!(storage.classify("audio/mpeg"), ResourceKind::Video);
        assert_eq!(CloudinaryStorage::bucket(ResourceKind::Audio), "video");
    }

    #[test]
    fn images_and_videos_map_directly() {
        let storage = storage();
        assert_eq!(storage.classify("image/png"), ResourceKind::Image);
        assert_eq!(storage.classify("video/mp4"), ResourceKind::Video);
        assert_eq!(CloudinaryStorage::bucket(ResourceKind::Image), "image");
        assert_eq!(CloudinaryStorage::bucket(ResourceKind::Video), "video");
    }

    #[test]
    fn unknown_types_use_the_auto_bucket() {
        let storage = storage();
        assert_eq!(storage.classify("application/pdf"), ResourceKind::Raw);
        assert_eq!(CloudinaryStorage::bucket(ResourceKind::Raw), "auto");
    }

    #[test]
    fn signature_payload_is_sorted_and_excludes_credentials() {
        let payload = CloudinaryStorage::signature_payload("qr_media", "photo", 1700000000);
        assert_eq!(
            payload,
            "access_mode=public&folder=qr_media&public_id=photo&timestamp=1700000000"
        );
        assert!(!payload.contains("api_key"));
    }

    #[test]
    fn signing_is_deterministic_and_secret_dependent() {
        let a = storage().sign("access_mode=public&timestamp=1");
        let b = storage().sign("access_mode=public&timestamp=1");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64); // sha256 hex

        let other = CloudinaryStorage::new(
            "demo".to_string(),
            "key".to_string(),
            "other-secret".to_string(),
        );
        assert_ne!(a, other.sign("access_mode=public&timestamp=1"));
    }
}
