//! Request-scoped models. Nothing here outlives a single request.

use serde::Serialize;
use utoipa::ToSchema;

/// How a stored object is classified for the storage provider.
///
/// Backends may remap kinds onto provider-specific buckets (for example a
/// provider that files audio under its video pipeline), but classification
/// itself is provider-neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Image,
    Video,
    Audio,
    /// Anything that is not recognizably image, video, or audio.
    Raw,
}

impl ResourceKind {
    /// Classify by MIME type prefix.
    pub fn from_content_type(content_type: &str) -> Self {
        let normalized = content_type
            .split(';')
            .next()
            .unwrap_or(content_type)
            .trim()
            .to_lowercase();
        if normalized.starts_with("image/") {
            ResourceKind::Image
        } else if normalized.starts_with("video/") {
            ResourceKind::Video
        } else if normalized.starts_with("audio/") {
            ResourceKind::Audio
        } else {
            ResourceKind::Raw
        }
    }
}

/// Successful reply from `POST /generate_qr`.
///
/// `qr_content` is always the stored file's public URL - the QR code never
/// encodes the raw file bytes.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GenerateQrResponse {
    pub success: bool,
    /// `data:image/png;base64,...` payload for inline display
    pub qr_image: String,
    /// Public URL of the stored media file
    pub file_url: String,
    pub filename: String,
    pub content_type: String,
    /// The exact text encoded in the QR image
    pub qr_content: String,
}
