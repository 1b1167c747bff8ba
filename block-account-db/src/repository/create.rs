use async_trait::async_trait;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for inserting a single entity
///
/// This trait provides a standard interface for creating an entity in a data
/// store. Any entity that implements the Identifiable trait can be created
/// using this trait. The insert is a single non-transactional statement.
/// Returns the saved item with any store-generated fields populated.
///
/// # Type Parameters
/// * `T` - The entity type that must implement the Identifiable trait
///
/// # Example
/// ```ignore
/// impl Create<BlockAccountModel> for BlockAccountRepositoryImpl {
///     async fn create(&self, item: BlockAccountModel) -> Result<BlockAccountModel, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait Create<T: Identifiable>: Send + Sync {
    /// Insert a single item
    ///
    /// # Arguments
    /// * `item` - The entity to insert; store-generated fields are ignored on input
    ///
    /// # Returns
    /// * `Ok(T)` - The created entity with generated fields populated
    /// * `Err` - An error if the statement could not be executed
    async fn create(&self, item: T) -> Result<T, Box<dyn std::error::Error + Send + Sync>>;
}
