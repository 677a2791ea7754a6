use anyhow::Result;
use async_trait::async_trait;

use crate::core::interfaces::adapters::ChatPlugin;
use crate::core::models::{ChatMessage, PluginResponse};
use crate::global_constants::{IDENTITY_REPLY, LOG_TAG_IDENTITY};

/// Answers whenever someone says the bot's name.
pub struct IdentityPlugin {
    bot_name: String,
}

impl IdentityPlugin {
    pub fn new(bot_name: String) -> Self {
        Self { bot_name }
    }
}

#[async_trait]
impl ChatPlugin for IdentityPlugin {
    fn name(&self) -> &str {
        "identity"
    }

    async fn handle(&self, message: &ChatMessage) -> Result<PluginResponse> {
        let replies: Vec<String> = message
            .text
            .split(' ')
            .filter(|token| *token == self.bot_name)
            .map(|_| IDENTITY_REPLY.to_string())
            .collect();

        if !replies.is_empty() {
            log::debug!(
                "{} Mentioned {} time(s) in {}",
                LOG_TAG_IDENTITY,
                replies.len(),
                message.channel
            );
        }

        Ok(PluginResponse::replies(replies))
    }
}
