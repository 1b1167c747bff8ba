pub mod block_account;
pub mod identifiable;

// Re-exports
pub use block_account::*;
pub use identifiable::*;
