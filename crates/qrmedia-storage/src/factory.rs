//! Config-driven storage construction.

use std::sync::Arc;

use qrmedia_core::Config;

use crate::{Storage, StorageResult};

/// Create the storage backend for a given configuration.
///
/// The Cloudinary backend is the production default; the in-memory backend is
/// only reachable when it is the sole backend compiled in (tests construct it
/// directly instead of going through this factory).
pub fn create_storage(config: &Config) -> StorageResult<Arc<dyn Storage>> {
    #[cfg(feature = "storage-cloudinary")]
    {
        let storage = crate::CloudinaryStorage::new(
            config.cloudinary_cloud_name.clone(),
            config.cloudinary_api_key.clone(),
            config.cloudinary_api_secret.clone(),
        );
        Ok(Arc::new(storage))
    }

    #[cfg(all(not(feature = "storage-cloudinary"), feature = "storage-memory"))]
    {
        let _ = config;
        Ok(Arc::new(crate::MemoryStorage::new(
            "http://localhost/storage",
        )))
    }

    #[cfg(all(not(feature = "storage-cloudinary"), not(feature = "storage-memory")))]
    {
        let _ = config;
        Err(crate::StorageError::ConfigError(
            "no storage backend compiled in".to_string(),
        ))
    }
}
