use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Query, State},
    http::{header, StatusCode},
    response::Response,
};
use qrmedia_core::AppError;
use qrmedia_processing::render_qr_png;
use serde::Deserialize;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

const DOWNLOAD_FILENAME: &str = "qrcode.png";

#[derive(Debug, Deserialize)]
pub struct DownloadQrQuery {
    pub url: Option<String>,
}

/// Download a QR code for an arbitrary URL
///
/// The image is regenerated on every call - rendering is deterministic, so
/// there is nothing worth caching.
#[utoipa::path(
    get,
    path = "/download_qr",
    tag = "qr",
    params(
        ("url" = Option<String>, Query, description = "Text to encode, typically a stored file's public URL")
    ),
    responses(
        (status = 200, description = "QR code PNG attachment", content_type = "image/png"),
        (status = 400, description = "No URL provided", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "download_qr"))]
pub async fn download_qr(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DownloadQrQuery>,
) -> Result<Response, HttpAppError> {
    let url = query
        .url
        .filter(|u| !u.is_empty())
        .ok_or_else(|| AppError::InvalidInput("No URL provided".to_string()))?;

    let png = render_qr_png(&url, state.config.qr_image_size)?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "image/png")
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", DOWNLOAD_FILENAME),
        )
        .body(Body::from(png))
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to build response");
            AppError::Internal(e.to_string()).into()
        })
}
