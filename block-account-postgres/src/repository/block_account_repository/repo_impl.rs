use async_trait::async_trait;
use block_account_db::models::block_account::BlockAccountModel;
use block_account_db::repository::{Create, Delete, FindById, FindByUserId, Ping};
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use std::error::Error;
use std::sync::Arc;

use crate::utils::{get_account_status, TryFromRow};

/// PostgreSQL-backed repository for `block_accounts` rows.
///
/// Every operation is a single statement against the shared pool; there are
/// no multi-row invariants to protect, so nothing runs in a transaction.
pub struct BlockAccountRepositoryImpl {
    pub(crate) pool: Arc<PgPool>,
}

impl BlockAccountRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for BlockAccountModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        use sqlx::Row;

        Ok(BlockAccountModel {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            principal: row.try_get("principal")?,
            start_date: row.try_get("start_date")?,
            end_date: row.try_get("end_date")?,
            interest_rate: row.try_get("interest_rate")?,
            status: get_account_status(row, "status")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

#[async_trait]
impl Create<BlockAccountModel> for BlockAccountRepositoryImpl {
    async fn create(
        &self,
        item: BlockAccountModel,
    ) -> Result<BlockAccountModel, Box<dyn Error + Send + Sync>> {
        Self::create_impl(self, item).await
    }
}

#[async_trait]
impl FindById<BlockAccountModel> for BlockAccountRepositoryImpl {
    async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<BlockAccountModel>, Box<dyn Error + Send + Sync>> {
        Self::find_by_id_impl(self, id).await
    }
}

#[async_trait]
impl FindByUserId<BlockAccountModel> for BlockAccountRepositoryImpl {
    async fn find_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<BlockAccountModel>, Box<dyn Error + Send + Sync>> {
        Self::find_by_user_id_impl(self, user_id).await
    }
}

#[async_trait]
impl Delete for BlockAccountRepositoryImpl {
    async fn delete(&self, id: i32) -> Result<u64, Box<dyn Error + Send + Sync>> {
        Self::delete_impl(self, id).await
    }
}

#[async_trait]
impl Ping for BlockAccountRepositoryImpl {
    async fn ping(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        Self::ping_impl(self).await
    }
}
