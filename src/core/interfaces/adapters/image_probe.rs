use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::ProbeReport;

#[async_trait]
pub trait ImageProbe: Send + Sync {
    async fn probe(&self, url: &str) -> Result<ProbeReport>;
}
