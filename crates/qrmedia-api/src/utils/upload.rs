//! Common utilities for the file upload handler

use axum::extract::Multipart;
use qrmedia_core::AppError;
use qrmedia_storage::UploadFile;

/// Extract file data, filename, and content type from multipart form.
/// Only one field named "file" is accepted; multiple file fields are rejected.
pub async fn extract_multipart_file(mut multipart: Multipart) -> Result<UploadFile, AppError> {
    let mut file_data: Option<bytes::Bytes> = None;
    let mut filename: Option<String> = None;
    let mut content_type: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read multipart: {}", e)))?
    {
        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();

        if field_name == "file" {
            if file_data.is_some() {
                return Err(AppError::InvalidInput(
                    "Multiple file fields are not allowed; send exactly one field named 'file'"
                        .to_string(),
                ));
            }
            filename = field.file_name().map(|s: &str| s.to_string());
            content_type = field.content_type().map(|s: &str| s.to_string());

            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::InvalidInput(format!("Failed to read file data: {}", e)))?;

            file_data = Some(data);
        }
    }

    let data = file_data.ok_or_else(|| AppError::InvalidInput("No file provided".to_string()))?;

    let filename = filename.unwrap_or_default();
    if filename.is_empty() {
        return Err(AppError::InvalidInput("No file selected".to_string()));
    }

    let content_type = content_type.unwrap_or_else(|| "application/octet-stream".to_string());

    Ok(UploadFile {
        data,
        filename,
        content_type,
    })
}

/// Validate file size against the configured maximum.
pub fn validate_file_size(file_size: usize, max_size: usize) -> Result<(), AppError> {
    if file_size > max_size {
        return Err(AppError::PayloadTooLarge(format!(
            "File size must be less than {} MB",
            max_size / 1024 / 1024
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_at_the_limit_is_accepted() {
        assert!(validate_file_size(16 * 1024 * 1024, 16 * 1024 * 1024).is_ok());
    }

    #[test]
    fn size_over_the_limit_is_rejected() {
        let err = validate_file_size(16 * 1024 * 1024 + 1, 16 * 1024 * 1024).unwrap_err();
        assert!(matches!(err, AppError::PayloadTooLarge(_)));
    }
}
