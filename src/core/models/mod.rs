mod bot_settings;
mod chat_message;
mod image_url;
mod probe_report;
mod search_error;
mod validation_outcome;

pub use bot_settings::{BotSettings, GisSettings};
pub use chat_message::{ChatMessage, ChatReply, PluginResponse};
pub use image_url::{ensure_suffix, image_suffix_from_content_type};
pub use probe_report::ProbeReport;
pub use search_error::{ProbeFailure, SearchError};
pub use validation_outcome::{ValidationOutcome, ValidationSummary};
