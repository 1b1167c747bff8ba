use async_trait::async_trait;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for finding an entity by its ID
///
/// This trait provides a standard interface for finding entities in a data
/// store. Returns an Option to handle cases where the entity might not
/// exist; absence is not an error.
///
/// # Type Parameters
/// * `T` - The entity type that must implement the Identifiable trait
///
/// # Example
/// ```ignore
/// impl FindById<BlockAccountModel> for BlockAccountRepositoryImpl {
///     async fn find_by_id(&self, id: i32) -> Result<Option<BlockAccountModel>, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait FindById<T: Identifiable>: Send + Sync {
    /// Find an entity by its unique identifier
    ///
    /// # Arguments
    /// * `id` - The id of the entity to find
    ///
    /// # Returns
    /// * `Ok(Some(T))` - The found entity
    /// * `Ok(None)` - If the entity does not exist
    /// * `Err` - An error if the query could not be executed
    async fn find_by_id(&self, id: i32)
        -> Result<Option<T>, Box<dyn std::error::Error + Send + Sync>>;
}
