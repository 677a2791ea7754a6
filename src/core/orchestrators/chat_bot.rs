use std::sync::Arc;

use crate::core::interfaces::adapters::ChatPlugin;
use crate::core::models::{ChatMessage, ChatReply};
use crate::global_constants::LOG_TAG_BOT;

/// Runs incoming messages through the registered plugins in order.
pub struct ChatBot {
    plugins: Vec<Arc<dyn ChatPlugin>>,
}

impl ChatBot {
    pub fn build(plugins: Vec<Arc<dyn ChatPlugin>>) -> Self {
        Self { plugins }
    }

    pub async fn handle_message(&self, message: &ChatMessage) -> Vec<ChatReply> {
        let mut replies = Vec::new();

        for plugin in &self.plugins {
            match plugin.handle(message).await {
                Ok(response) => {
                    replies.extend(response.replies.into_iter().map(|text| message.reply(text)));
                    if response.stop {
                        log::debug!(
                            "{} Plugin {} stopped dispatch in {}",
                            LOG_TAG_BOT,
                            plugin.name(),
                            message.channel
                        );
                        break;
                    }
                }
                Err(error) => {
                    log::error!(
                        "{} Plugin {} failed in {}: {:#}",
                        LOG_TAG_BOT,
                        plugin.name(),
                        message.channel,
                        error
                    );
                    replies.push(message.reply(format!("error: {}", error)));
                    break;
                }
            }
        }

        replies
    }
}
