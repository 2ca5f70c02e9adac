//! Application state.
//!
//! Everything here is read-only after startup; no mutable state is shared
//! across requests, so handlers need no locking.

use std::sync::Arc;

use qrmedia_core::Config;
use qrmedia_storage::Storage;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub storage: Arc<dyn Storage>,
}
