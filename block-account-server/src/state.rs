//! Application state shared across request handlers.

use block_account_api::service::BlockAccountService;
use std::sync::Arc;

/// Shared application state.
///
/// The service instance is injected here at construction and handed to
/// handlers by the router; handlers never reach into ambient context for it.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<dyn BlockAccountService>,
}

impl AppState {
    pub fn new(service: Arc<dyn BlockAccountService>) -> Self {
        Self { service }
    }
}
