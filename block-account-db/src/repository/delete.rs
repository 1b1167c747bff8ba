use async_trait::async_trait;

/// Repository trait for deleting an entity by its ID
///
/// The delete is a single non-transactional statement. Returns the number of
/// rows removed so callers can distinguish a missing id (0) from a
/// successful delete (1) without a prior lookup.
///
/// # Example
/// ```ignore
/// impl Delete for BlockAccountRepositoryImpl {
///     async fn delete(&self, id: i32) -> Result<u64, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait Delete: Send + Sync {
    /// Delete an entity by its unique identifier
    ///
    /// # Arguments
    /// * `id` - The id of the entity to delete
    ///
    /// # Returns
    /// * `Ok(u64)` - The number of rows removed (0 when the id was absent)
    /// * `Err` - An error if the statement could not be executed
    async fn delete(&self, id: i32) -> Result<u64, Box<dyn std::error::Error + Send + Sync>>;
}
