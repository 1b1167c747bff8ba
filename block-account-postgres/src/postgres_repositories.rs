use sqlx::PgPool;
use std::sync::Arc;

use crate::repository::block_account_repository::BlockAccountRepositoryImpl;

/// Factory over a shared connection pool.
///
/// Every repository created here clones the same bounded `PgPool`; pool
/// sizing is a deployment parameter, not a correctness mechanism.
pub struct PostgresRepositories {
    pool: Arc<PgPool>,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Repository for `block_accounts` rows.
    pub fn block_account_repository(&self) -> BlockAccountRepositoryImpl {
        BlockAccountRepositoryImpl::new(self.pool.clone())
    }
}
