//! Account service implementation.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use validator::Validate;

use block_account_api::domain::{BlockAccount, CreateBlockAccountRequest, PeriodCode};
use block_account_api::error::{ApiError, ApiResult};
use block_account_api::service::BlockAccountService;
use block_account_db::models::block_account::BlockAccountModel;
use block_account_db::repository::{Create, Delete, FindById, FindByUserId, Ping};

/// Applies the rate table and delegates persistence to the account store.
///
/// Generic over the repository so tests can substitute an in-memory store.
/// Every store round trip is bounded by `store_timeout`; an elapsed timeout
/// surfaces as a database error like any other store failure.
pub struct BlockAccountServiceImpl<R> {
    repository: Arc<R>,
    store_timeout: Duration,
}

impl<R> BlockAccountServiceImpl<R> {
    pub fn new(repository: Arc<R>, store_timeout: Duration) -> Self {
        Self {
            repository,
            store_timeout,
        }
    }
}

impl<R: Send + Sync> BlockAccountServiceImpl<R> {
    async fn bounded<T, F>(&self, operation: F) -> ApiResult<T>
    where
        F: Future<Output = Result<T, Box<dyn std::error::Error + Send + Sync>>> + Send,
    {
        match tokio::time::timeout(self.store_timeout, operation).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(err)) => Err(ApiError::database(err)),
            Err(_) => Err(ApiError::DatabaseError(format!(
                "store operation timed out after {:?}",
                self.store_timeout
            ))),
        }
    }
}

#[async_trait]
impl<R> BlockAccountService for BlockAccountServiceImpl<R>
where
    R: Create<BlockAccountModel>
        + FindById<BlockAccountModel>
        + FindByUserId<BlockAccountModel>
        + Delete
        + Ping
        + 'static,
{
    async fn create_block_account(
        &self,
        request: CreateBlockAccountRequest,
    ) -> ApiResult<BlockAccount> {
        request.validate()?;
        let period: PeriodCode = request.period.parse()?;
        let term = period.term();

        let start_date = Utc::now();
        let end_date = start_date + chrono::Duration::days(term.duration_days);
        let account = BlockAccountModel::new_unsaved(
            request.user_id,
            request.principal,
            start_date,
            end_date,
            term.annual_rate,
        );

        let created = self
            .bounded(self.repository.create(account))
            .await
            .map_err(|err| {
                tracing::error!(user_id = request.user_id, error = %err, "failed to create block account");
                err
            })?;
        Ok(created.into())
    }

    async fn get_block_account(&self, id: i32) -> ApiResult<Option<BlockAccount>> {
        let found = self
            .bounded(self.repository.find_by_id(id))
            .await
            .map_err(|err| {
                tracing::error!(id, error = %err, "failed to load block account");
                err
            })?;
        Ok(found.map(BlockAccount::from))
    }

    async fn get_user_block_accounts(&self, user_id: i32) -> ApiResult<Vec<BlockAccount>> {
        let accounts = self
            .bounded(self.repository.find_by_user_id(user_id))
            .await
            .map_err(|err| {
                tracing::error!(user_id, error = %err, "failed to load user block accounts");
                err
            })?;
        Ok(accounts.into_iter().map(BlockAccount::from).collect())
    }

    async fn delete_block_account(&self, id: i32) -> ApiResult<()> {
        let removed = self
            .bounded(self.repository.delete(id))
            .await
            .map_err(|err| {
                tracing::error!(id, error = %err, "failed to delete block account");
                err
            })?;
        if removed == 0 {
            return Err(ApiError::NotFound(format!(
                "block account {id} does not exist"
            )));
        }
        Ok(())
    }

    async fn health_check(&self) -> ApiResult<()> {
        self.bounded(self.repository.ping()).await
    }
}
