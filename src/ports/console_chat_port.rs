use anyhow::Result;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::Mutex;
use tokio::task::{JoinError, JoinSet};

use crate::core::models::{ChatMessage, ChatReply};
use crate::core::orchestrators::ChatBot;
use crate::global_constants::LOG_TAG_CONSOLE;

/// Line-based chat transport: `#channel text` or bare `text` in, `#channel reply` out.
pub struct ConsoleChatPort {
    default_channel: String,
}

impl ConsoleChatPort {
    pub fn initialize(default_channel: String) -> Self {
        log::debug!(
            "{} initializing console chat on {}",
            LOG_TAG_CONSOLE,
            default_channel
        );
        Self { default_channel }
    }

    pub fn parse_line(&self, line: &str) -> Option<ChatMessage> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        if line.starts_with('#') {
            let (channel, text) = line.split_once(char::is_whitespace)?;
            let text = text.trim();
            if text.is_empty() {
                return None;
            }
            return Some(ChatMessage::new(channel, text));
        }

        Some(ChatMessage::new(self.default_channel.as_str(), line))
    }

    pub fn format_reply(reply: &ChatReply) -> String {
        format!("{} {}", reply.channel, reply.text)
    }

    /// Reads messages until EOF. Each message is handled on its own task so a slow
    /// search never holds up the next line; all tasks are drained before returning.
    pub async fn run<R, W>(&self, bot: Arc<ChatBot>, input: R, output: W) -> Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let output = Arc::new(Mutex::new(output));
        let mut lines = BufReader::new(input).lines();
        let mut in_flight = JoinSet::new();

        while let Some(line) = lines.next_line().await? {
            let Some(message) = self.parse_line(&line) else {
                continue;
            };

            let bot = Arc::clone(&bot);
            let output = Arc::clone(&output);
            in_flight.spawn(async move {
                let replies = bot.handle_message(&message).await;
                let mut output = output.lock().await;
                for reply in replies {
                    let line = format!("{}\n", Self::format_reply(&reply));
                    if let Err(error) = output.write_all(line.as_bytes()).await {
                        log::error!("{} Failed to write reply: {}", LOG_TAG_CONSOLE, error);
                        return;
                    }
                }
                if let Err(error) = output.flush().await {
                    log::error!("{} Failed to flush output: {}", LOG_TAG_CONSOLE, error);
                }
            });

            reap_finished(&mut in_flight);
        }

        log::info!(
            "{} Input closed, waiting for {} pending message(s)",
            LOG_TAG_CONSOLE,
            in_flight.len()
        );
        while let Some(joined) = in_flight.join_next().await {
            log_joined(joined);
        }

        Ok(())
    }
}

/// Collects tasks that already finished so a long-lived session does not pile them up.
fn reap_finished(in_flight: &mut JoinSet<()>) {
    while let Some(joined) = in_flight.try_join_next() {
        log_joined(joined);
    }
}

fn log_joined(joined: Result<(), JoinError>) {
    if let Err(error) = joined {
        log::error!("{} Message task failed: {}", LOG_TAG_CONSOLE, error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::interfaces::adapters::ChatPlugin;
    use crate::plugins::IdentityPlugin;

    fn create_port() -> ConsoleChatPort {
        ConsoleChatPort::initialize("#general".to_string())
    }

    #[test]
    fn test_parse_line_with_channel_prefix() {
        let message = create_port().parse_line("#random gis cats").unwrap();

        assert_eq!(message, ChatMessage::new("#random", "gis cats"));
    }

    #[test]
    fn test_parse_line_without_channel_uses_default() {
        let message = create_port().parse_line("  hello world ").unwrap();

        assert_eq!(message, ChatMessage::new("#general", "hello world"));
    }

    #[test]
    fn test_parse_line_ignores_blank_and_channel_only_lines() {
        let port = create_port();

        assert_eq!(port.parse_line(""), None);
        assert_eq!(port.parse_line("   "), None);
        assert_eq!(port.parse_line("#random"), None);
        assert_eq!(port.parse_line("#random   "), None);
    }

    #[test]
    fn test_format_reply() {
        let reply = ChatReply {
            channel: "#a".to_string(),
            text: "http://x/a.png".to_string(),
        };

        assert_eq!(ConsoleChatPort::format_reply(&reply), "#a http://x/a.png");
    }

    #[tokio::test]
    async fn test_reap_finished_empties_completed_tasks() {
        let mut in_flight = JoinSet::new();
        for _ in 0..50 {
            in_flight.spawn(async {});
        }
        in_flight.spawn(async { panic!("handler blew up") });

        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        reap_finished(&mut in_flight);

        assert!(in_flight.is_empty());
    }

    #[tokio::test]
    async fn test_reap_finished_keeps_running_tasks() {
        let mut in_flight = JoinSet::new();
        in_flight.spawn(async {});
        in_flight.spawn(tokio::time::sleep(std::time::Duration::from_secs(5)));

        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        reap_finished(&mut in_flight);

        assert_eq!(in_flight.len(), 1);
        in_flight.abort_all();
    }

    #[tokio::test]
    async fn test_run_writes_replies_for_each_line() {
        let identity = Arc::new(IdentityPlugin::new("gesture".to_string()));
        let bot = Arc::new(ChatBot::build(vec![identity as Arc<dyn ChatPlugin>]));
        let input: &[u8] = b"#lobby hi gesture\nnobody here\n";
        let (writer, mut reader) = tokio::io::duplex(1024);

        create_port().run(bot, input, writer).await.unwrap();

        let mut written = String::new();
        tokio::io::AsyncReadExt::read_to_string(&mut reader, &mut written)
            .await
            .unwrap();
        assert_eq!(written, "#lobby i am halping\n");
    }
}
