use async_trait::async_trait;

/// Repository trait for checking that the backing store is reachable
///
/// Implementations issue the cheapest possible round trip. Used by the
/// health endpoint; never retried.
#[async_trait]
pub trait Ping: Send + Sync {
    /// Verify the store answers a trivial query
    ///
    /// # Returns
    /// * `Ok(())` - The store is reachable
    /// * `Err` - The connection or query failed
    async fn ping(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
