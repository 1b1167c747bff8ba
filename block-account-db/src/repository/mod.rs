pub mod create;
pub mod delete;
pub mod find_by_id;
pub mod find_by_user_id;
pub mod ping;

// Re-exports
pub use create::*;
pub use delete::*;
pub use find_by_id::*;
pub use find_by_user_id::*;
pub use ping::*;
