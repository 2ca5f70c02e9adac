//! Storage abstraction and backends.
//!
//! The `Storage` trait hides the hosted-file provider behind a small
//! interface: classify a content type, upload a file, get back a public URL.
//! The Cloudinary backend talks to the real provider; the in-memory backend
//! exists for tests and local development.
//!
//! Objects are named from the upload's base filename (text before the first
//! `.`), scoped to a folder. Collision behavior for repeated uploads with
//! the same name is owned by the provider.

#[cfg(feature = "storage-cloudinary")]
pub mod cloudinary;
pub mod factory;
#[cfg(feature = "storage-memory")]
pub mod memory;
pub mod traits;

// Re-export commonly used types
#[cfg(feature = "storage-cloudinary")]
pub use cloudinary::CloudinaryStorage;
pub use factory::create_storage;
#[cfg(feature = "storage-memory")]
pub use memory::MemoryStorage;
pub use qrmedia_core::ResourceKind;
pub use traits::{Storage, StorageError, StorageResult, StoredMedia, UploadFile};
