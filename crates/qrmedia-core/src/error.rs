//! Error types module
//!
//! All failures in the pipeline are unified under the `AppError` enum. Each
//! variant self-describes its HTTP presentation through `ErrorMetadata`, so
//! the API layer can render any error without matching on variants.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented.
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "STORAGE_ERROR")
    fn error_code(&self) -> &'static str;

    /// Client-facing message (may differ from the internal error message)
    fn client_message(&self) -> String;

    /// Whether details should be hidden from clients
    fn is_sensitive(&self) -> bool;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("File too large: {0}")]
    PayloadTooLarge(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Short error category name, used as a structured logging field.
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "invalid_input",
            AppError::PayloadTooLarge(_) => "payload_too_large",
            AppError::Storage(_) => "storage",
            AppError::Encoding(_) => "encoding",
            AppError::Internal(_) => "internal",
        }
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        match self {
            AppError::InvalidInput(_) => 400,
            AppError::PayloadTooLarge(_) => 413,
            AppError::Storage(_) => 502,
            AppError::Encoding(_) => 500,
            AppError::Internal(_) => 500,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            AppError::Storage(_) => "STORAGE_ERROR",
            AppError::Encoding(_) => "ENCODING_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn client_message(&self) -> String {
        match self {
            AppError::InvalidInput(msg) => msg.clone(),
            AppError::PayloadTooLarge(msg) => msg.clone(),
            // The provider error may leak endpoint or account details.
            AppError::Storage(_) => "Failed to upload file to cloud storage".to_string(),
            AppError::Encoding(_) => "Failed to generate QR code".to_string(),
            AppError::Internal(_) => "Internal server error".to_string(),
        }
    }

    fn is_sensitive(&self) -> bool {
        matches!(self, AppError::Storage(_) | AppError::Internal(_))
    }

    fn log_level(&self) -> LogLevel {
        match self {
            AppError::InvalidInput(_) | AppError::PayloadTooLarge(_) => LogLevel::Debug,
            AppError::Storage(_) | AppError::Encoding(_) | AppError::Internal(_) => {
                LogLevel::Error
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_client_visible() {
        let err = AppError::InvalidInput("No file provided".to_string());
        assert_eq!(err.http_status_code(), 400);
        assert!(!err.is_sensitive());
        assert_eq!(err.client_message(), "No file provided");
        assert_eq!(err.log_level(), LogLevel::Debug);
    }

    #[test]
    fn storage_errors_hide_details() {
        let err = AppError::Storage("cloudinary: 401 unauthorized".to_string());
        assert_eq!(err.http_status_code(), 502);
        assert!(err.is_sensitive());
        assert_eq!(err.client_message(), "Failed to upload file to cloud storage");
    }

    #[test]
    fn internal_errors_hide_details() {
        let err = AppError::Internal("lock poisoned".to_string());
        assert_eq!(err.http_status_code(), 500);
        assert!(err.is_sensitive());
        assert_eq!(err.client_message(), "Internal server error");
        assert_eq!(err.log_level(), LogLevel::Error);
    }

    #[test]
    fn oversized_maps_to_413() {
        let err = AppError::PayloadTooLarge("too big".to_string());
        assert_eq!(err.http_status_code(), 413);
        assert_eq!(err.error_code(), "PAYLOAD_TOO_LARGE");
    }
}
