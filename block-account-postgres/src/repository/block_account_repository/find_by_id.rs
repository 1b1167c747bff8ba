use block_account_db::models::block_account::BlockAccountModel;

use super::repo_impl::BlockAccountRepositoryImpl;
use crate::utils::TryFromRow;

impl BlockAccountRepositoryImpl {
    pub(super) async fn find_by_id_impl(
        repo: &BlockAccountRepositoryImpl,
        id: i32,
    ) -> Result<Option<BlockAccountModel>, Box<dyn std::error::Error + Send + Sync>> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, principal, start_date, end_date, interest_rate, status, created_at, updated_at
            FROM block_accounts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(repo.pool.as_ref())
        .await?;

        row.as_ref().map(BlockAccountModel::try_from_row).transpose()
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::{new_test_account, setup_test_context};
    use block_account_db::repository::{Create, Delete, FindById};
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    #[ignore = "requires a running PostgreSQL instance"]
    async fn test_find_by_id_returns_created_row(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let repo = ctx.block_accounts();

        let created = repo.create(new_test_account(9003)).await?;
        let found = repo.find_by_id(created.id).await?;
        assert_eq!(found.as_ref(), Some(&created));

        repo.delete(created.id).await?;
        Ok(())
    }

    #[tokio::test]
    #[serial]
    #[ignore = "requires a running PostgreSQL instance"]
    async fn test_find_by_id_missing_yields_none(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let repo = ctx.block_accounts();

        let found = repo.find_by_id(i32::MAX).await?;
        assert!(found.is_none());
        Ok(())
    }
}
