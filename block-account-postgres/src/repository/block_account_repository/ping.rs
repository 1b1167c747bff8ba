use super::repo_impl::BlockAccountRepositoryImpl;

impl BlockAccountRepositoryImpl {
    pub(super) async fn ping_impl(
        repo: &BlockAccountRepositoryImpl,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        sqlx::query("SELECT 1").execute(repo.pool.as_ref()).await?;
        Ok(())
    }
}
