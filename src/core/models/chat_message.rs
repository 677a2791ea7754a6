#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub channel: String,
    pub text: String,
}

impl ChatMessage {
    pub fn new(channel: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            text: text.into(),
        }
    }

    pub fn reply(&self, text: impl Into<String>) -> ChatReply {
        ChatReply {
            channel: self.channel.clone(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub channel: String,
    pub text: String,
}

/// What a plugin did with a message. `stop` ends dispatch to later plugins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluginResponse {
    pub replies: Vec<String>,
    pub stop: bool,
}

impl PluginResponse {
    pub fn pass() -> Self {
        Self::default()
    }

    pub fn stop() -> Self {
        Self {
            replies: Vec::new(),
            stop: true,
        }
    }

    pub fn reply_and_stop(text: impl Into<String>) -> Self {
        Self {
            replies: vec![text.into()],
            stop: true,
        }
    }

    pub fn replies(replies: Vec<String>) -> Self {
        Self {
            replies,
            stop: false,
        }
    }
}
