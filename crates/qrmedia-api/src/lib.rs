//! qrmedia API library
//!
//! HTTP surface for the upload-and-QR pipeline: handlers, error-to-response
//! conversion, and application setup.

// Module declarations
mod api_doc;
mod telemetry;
mod utils;

// Public modules
pub mod error;
pub mod handlers;
pub mod setup;
pub mod state;

// Re-exports
pub use error::ErrorResponse;
pub use state::AppState;
