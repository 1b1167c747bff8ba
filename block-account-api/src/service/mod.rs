pub mod block_account_service;

// Re-exports
pub use block_account_service::*;
