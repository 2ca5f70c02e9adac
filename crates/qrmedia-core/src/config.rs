//! Configuration module
//!
//! Configuration is sourced from environment variables (a `.env` file is
//! honored in development). Provider credentials are required: startup fails
//! if any of them is unset or blank, so a misconfigured deployment cannot
//! silently fall back to someone else's account.

use std::env;

use anyhow::Context;

const DEFAULT_SERVER_PORT: u16 = 5000;
const DEFAULT_UPLOAD_FOLDER: &str = "qr_media";
const MAX_UPLOAD_SIZE_BYTES: usize = 16 * 1024 * 1024;
const QR_IMAGE_SIZE: u32 = 400;

/// Application configuration, loaded once at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub environment: String,
    pub cors_origins: Vec<String>,
    // Cloudinary credentials (required, no fallback values)
    pub cloudinary_cloud_name: String,
    pub cloudinary_api_key: String,
    pub cloudinary_api_secret: String,
    // Upload / QR settings
    pub upload_folder: String,
    pub max_upload_size_bytes: usize,
    pub qr_image_size: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let server_port = match env::var("SERVER_PORT") {
            Ok(port) => port
                .parse::<u16>()
                .context("SERVER_PORT must be a valid port number")?,
            Err(_) => DEFAULT_SERVER_PORT,
        };

        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_upload_size_bytes = match env::var("MAX_UPLOAD_SIZE_BYTES") {
            Ok(size) => size
                .parse::<usize>()
                .context("MAX_UPLOAD_SIZE_BYTES must be a positive integer")?,
            Err(_) => MAX_UPLOAD_SIZE_BYTES,
        };

        let qr_image_size = match env::var("QR_IMAGE_SIZE") {
            Ok(size) => size
                .parse::<u32>()
                .context("QR_IMAGE_SIZE must be a positive integer")?,
            Err(_) => QR_IMAGE_SIZE,
        };

        let config = Config {
            server_port,
            environment,
            cors_origins,
            cloudinary_cloud_name: require_env("CLOUDINARY_CLOUD_NAME")?,
            cloudinary_api_key: require_env("CLOUDINARY_API_KEY")?,
            cloudinary_api_secret: require_env("CLOUDINARY_API_SECRET")?,
            upload_folder: env::var("UPLOAD_FOLDER")
                .unwrap_or_else(|_| DEFAULT_UPLOAD_FOLDER.to_string()),
            max_upload_size_bytes,
            qr_image_size,
        };

        config.validate()?;
        Ok(config)
    }

    /// Check invariants that `from_env` parsing alone cannot catch.
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.upload_folder.is_empty() {
            anyhow::bail!("UPLOAD_FOLDER must not be empty");
        }
        if self.max_upload_size_bytes == 0 {
            anyhow::bail!("MAX_UPLOAD_SIZE_BYTES must be greater than zero");
        }
        // A version-1 QR code is 21 modules; anything smaller cannot scan.
        if self.qr_image_size < 21 {
            anyhow::bail!("QR_IMAGE_SIZE must be at least 21 pixels");
        }
        Ok(())
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }
}

fn require_env(name: &str) -> Result<String, anyhow::Error> {
    let value = env::var(name)
        .map(|v| v.trim().to_string())
        .unwrap_or_default();
    if value.is_empty() {
        anyhow::bail!("{} must be set (no embedded default is provided)", name);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        Config {
            server_port: 5000,
            environment: "test".to_string(),
            cors_origins: vec!["*".to_string()],
            cloudinary_cloud_name: "demo".to_string(),
            cloudinary_api_key: "key".to_string(),
            cloudinary_api_secret: "secret".to_string(),
            upload_folder: "qr_media".to_string(),
            max_upload_size_bytes: 16 * 1024 * 1024,
            qr_image_size: 400,
        }
    }

    #[test]
    fn validate_accepts_defaults() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_folder() {
        let mut config = valid_config();
        config.upload_folder = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_max_size() {
        let mut config = valid_config();
        config.max_upload_size_bytes = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_unscannable_qr_size() {
        let mut config = valid_config();
        config.qr_image_size = 20;
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_credential_fails_startup() {
        env::remove_var("QRMEDIA_TEST_CREDENTIAL_UNSET");
        let err = require_env("QRMEDIA_TEST_CREDENTIAL_UNSET").unwrap_err();
        assert!(err.to_string().contains("must be set"));
    }

    #[test]
    fn blank_credential_fails_startup() {
        env::set_var("QRMEDIA_TEST_CREDENTIAL_BLANK", "   ");
        assert!(require_env("QRMEDIA_TEST_CREDENTIAL_BLANK").is_err());
        env::remove_var("QRMEDIA_TEST_CREDENTIAL_BLANK");
    }

    #[test]
    fn credentials_are_trimmed() {
        env::set_var("QRMEDIA_TEST_CREDENTIAL_SET", " secret ");
        assert_eq!(
            require_env("QRMEDIA_TEST_CREDENTIAL_SET").unwrap(),
            "secret"
        );
        env::remove_var("QRMEDIA_TEST_CREDENTIAL_SET");
    }

    #[test]
    fn production_detection() {
        let mut config = valid_config();
        assert!(!config.is_production());
        config.environment = "Production".to_string();
        assert!(config.is_production());
        config.environment = "prod".to_string();
        assert!(config.is_production());
    }
}
