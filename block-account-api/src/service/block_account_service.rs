use async_trait::async_trait;

use crate::domain::{BlockAccount, CreateBlockAccountRequest};
use crate::error::ApiResult;

/// Business operations over block accounts.
///
/// Implementations validate input, derive term fields from the rate table
/// and delegate persistence to the account store. The trait is object-safe
/// so the HTTP layer can hold it behind `Arc<dyn BlockAccountService>`.
#[async_trait]
pub trait BlockAccountService: Send + Sync {
    /// Validate the request, derive `start_date`/`end_date`/`interest_rate`
    /// and persist the account.
    ///
    /// # Returns
    /// * `Ok(BlockAccount)` - The persisted record with store-assigned id and timestamps
    /// * `Err(ApiError::ValidationError)` - Invalid user id, principal or period; nothing is written
    /// * `Err(ApiError::DatabaseError)` - The store rejected the insert
    async fn create_block_account(
        &self,
        request: CreateBlockAccountRequest,
    ) -> ApiResult<BlockAccount>;

    /// Look up an account by id. Absence is `Ok(None)`, not an error.
    async fn get_block_account(&self, id: i32) -> ApiResult<Option<BlockAccount>>;

    /// All accounts owned by `user_id`, ordered by creation time descending.
    /// Returns an empty vector when the user has none.
    async fn get_user_block_accounts(&self, user_id: i32) -> ApiResult<Vec<BlockAccount>>;

    /// Delete an account by id.
    ///
    /// # Returns
    /// * `Ok(())` - The record existed and was removed
    /// * `Err(ApiError::NotFound)` - No record had that id
    async fn delete_block_account(&self, id: i32) -> ApiResult<()>;

    /// Ping the backing store; used by the health endpoint.
    async fn health_check(&self) -> ApiResult<()>;
}
