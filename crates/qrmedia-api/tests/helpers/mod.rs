//! Shared test setup: an in-memory storage backend behind the real router.

use std::sync::Arc;

use axum_test::TestServer;
use qrmedia_api::setup::routes::setup_routes;
use qrmedia_api::state::AppState;
use qrmedia_core::Config;
use qrmedia_storage::MemoryStorage;

pub const TEST_STORAGE_BASE_URL: &str = "https://storage.test";

pub struct TestApp {
    pub server: TestServer,
    pub storage: Arc<MemoryStorage>,
}

pub fn test_config() -> Config {
    Config {
        server_port: 0,
        environment: "test".to_string(),
        cors_origins: vec!["*".to_string()],
        cloudinary_cloud_name: "test-cloud".to_string(),
        cloudinary_api_key: "test-key".to_string(),
        cloudinary_api_secret: "test-secret".to_string(),
        upload_folder: "qr_media".to_string(),
        max_upload_size_bytes: 16 * 1024 * 1024,
        qr_image_size: 400,
    }
}

pub fn setup_test_app() -> TestApp {
    setup_test_app_with_config(test_config())
}

pub fn setup_test_app_with_config(config: Config) -> TestApp {
    let storage = Arc::new(MemoryStorage::new(TEST_STORAGE_BASE_URL));
    let state = Arc::new(AppState {
        config: config.clone(),
        storage: storage.clone(),
    });
    let router = setup_routes(&config, state).expect("Failed to build router");
    let server = TestServer::new(router).expect("Failed to start test server");
    TestApp { server, storage }
}

/// A valid 1x1 PNG.
pub fn tiny_png() -> Vec<u8> {
    vec![
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, // PNG signature
        0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52, // IHDR chunk
        0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, // 1x1 dimensions
        0x08, 0x02, 0x00, 0x00, 0x00, 0x90, 0x77, 0x53, 0xDE, 0x00, 0x00, 0x00, 0x0C, 0x49,
        0x44, 0x41, 0x54, // IDAT chunk
        0x08, 0xD7, 0x63, 0xF8, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x18, 0xDD,
        0x8D, 0x89, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60,
        0x82, // IEND chunk
    ]
}
