use block_account_db::models::block_account::BlockAccountModel;

use super::repo_impl::BlockAccountRepositoryImpl;
use crate::utils::TryFromRow;

impl BlockAccountRepositoryImpl {
    pub(super) async fn find_by_user_id_impl(
        repo: &BlockAccountRepositoryImpl,
        user_id: i32,
    ) -> Result<Vec<BlockAccountModel>, Box<dyn std::error::Error + Send + Sync>> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, principal, start_date, end_date, interest_rate, status, created_at, updated_at
            FROM block_accounts
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(repo.pool.as_ref())
        .await?;

        let mut accounts = Vec::with_capacity(rows.len());
        for row in rows {
            accounts.push(BlockAccountModel::try_from_row(&row)?);
        }
        Ok(accounts)
    }
}
