mod chat_bot;
mod image_search_orchestrator;
mod image_selector;
mod query_dispatcher;
mod validator_pool;

pub use chat_bot::ChatBot;
pub use image_search_orchestrator::ImageSearchOrchestrator;
