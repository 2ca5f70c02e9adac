//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use qrmedia_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "qrmedia API",
        version = "0.1.0",
        description = "Upload a media file, store it with a hosted-file provider, and get back a QR code encoding the stored file's public URL."
    ),
    paths(
        handlers::generate_qr::generate_qr,
        handlers::download_qr::download_qr,
    ),
    components(schemas(models::GenerateQrResponse, error::ErrorResponse)),
    tags(
        (name = "qr", description = "Upload and QR generation endpoints")
    )
)]
pub struct ApiDoc;
