use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use qrmedia_core::models::GenerateQrResponse;
use qrmedia_core::AppError;
use qrmedia_processing::render_qr_png;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use crate::utils::upload::{extract_multipart_file, validate_file_size};

/// Upload a file and answer with a QR code of its public URL
///
/// The pipeline is strictly sequential: validate the multipart upload,
/// delegate storage to the external provider, render the QR code for the
/// returned URL, and reply inline as a base64 data URI. The first error
/// short-circuits; nothing is retried or cached.
#[utoipa::path(
    post,
    path = "/generate_qr",
    tag = "qr",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "File stored and QR code generated", body = GenerateQrResponse),
        (status = 400, description = "Missing file or empty filename", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 502, description = "Cloud storage upload failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(operation = "generate_qr"))]
pub async fn generate_qr(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<GenerateQrResponse>, HttpAppError> {
    let file = extract_multipart_file(multipart).await?;
    validate_file_size(file.data.len(), state.config.max_upload_size_bytes)?;

    tracing::debug!(
        filename = %file.filename,
        content_type = %file.content_type,
        size = file.data.len(),
        "Upload accepted, delegating to storage"
    );

    let stored = state
        .storage
        .upload(&file, &state.config.upload_folder)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, filename = %file.filename, "Cloud upload failed");
            AppError::Storage(e.to_string())
        })?;

    let png = render_qr_png(&stored.public_url, state.config.qr_image_size)?;
    let qr_image = format!("data:image/png;base64,{}", BASE64.encode(&png));

    Ok(Json(GenerateQrResponse {
        success: true,
        qr_image,
        file_url: stored.public_url.clone(),
        filename: file.filename,
        content_type: file.content_type,
        qr_content: stored.public_url,
    }))
}
