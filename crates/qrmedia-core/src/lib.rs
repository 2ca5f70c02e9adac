//! Core types shared across the qrmedia crates: configuration, the unified
//! application error type, and the request/response models.

pub mod config;
pub mod error;
pub mod models;

pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{GenerateQrResponse, ResourceKind};
