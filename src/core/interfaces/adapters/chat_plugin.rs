use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::{ChatMessage, PluginResponse};

#[async_trait]
pub trait ChatPlugin: Send + Sync {
    fn name(&self) -> &str;

    async fn handle(&self, message: &ChatMessage) -> Result<PluginResponse>;
}
