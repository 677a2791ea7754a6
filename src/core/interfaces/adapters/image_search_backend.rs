use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ImageSearchBackend: Send + Sync {
    /// Runs one search and returns candidate URLs. A null result list is an empty `Vec`.
    async fn query(&self, phrase: &str) -> Result<Vec<String>>;
}
