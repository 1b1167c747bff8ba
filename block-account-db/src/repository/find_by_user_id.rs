use async_trait::async_trait;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for finding all entities owned by a user
///
/// This trait provides a standard interface for listing the entities that
/// reference a given user id. Results are ordered by creation time,
/// descending; a user with no entities yields an empty vector, not an error.
///
/// # Type Parameters
/// * `T` - The entity type that must implement the Identifiable trait
///
/// # Example
/// ```ignore
/// impl FindByUserId<BlockAccountModel> for BlockAccountRepositoryImpl {
///     async fn find_by_user_id(&self, user_id: i32) -> Result<Vec<BlockAccountModel>, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait FindByUserId<T: Identifiable>: Send + Sync {
    /// Find all entities owned by a user
    ///
    /// # Arguments
    /// * `user_id` - The id of the owning user
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - The entities ordered by creation time descending (possibly empty)
    /// * `Err` - An error if the query could not be executed
    async fn find_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
