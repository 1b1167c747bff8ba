use block_account_db::models::block_account::BlockAccountModel;

use super::repo_impl::BlockAccountRepositoryImpl;
use crate::utils::TryFromRow;

impl BlockAccountRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &BlockAccountRepositoryImpl,
        account: BlockAccountModel,
    ) -> Result<BlockAccountModel, Box<dyn std::error::Error + Send + Sync>> {
        let row = sqlx::query(
            r#"
            INSERT INTO block_accounts (user_id, principal, start_date, end_date, interest_rate, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, principal, start_date, end_date, interest_rate, status, created_at, updated_at
            "#,
        )
        .bind(account.user_id)
        .bind(account.principal)
        .bind(account.start_date)
        .bind(account.end_date)
        .bind(account.interest_rate)
        .bind(account.status.as_str())
        .fetch_one(repo.pool.as_ref())
        .await?;

        BlockAccountModel::try_from_row(&row)
    }
}
