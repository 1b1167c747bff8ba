use super::repo_impl::BlockAccountRepositoryImpl;

impl BlockAccountRepositoryImpl {
    pub(super) async fn delete_impl(
        repo: &BlockAccountRepositoryImpl,
        id: i32,
    ) -> Result<u64, Box<dyn std::error::Error + Send + Sync>> {
        let result = sqlx::query("DELETE FROM block_accounts WHERE id = $1")
            .bind(id)
            .execute(repo.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }
}
