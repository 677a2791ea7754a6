mod chat_plugin;
mod image_probe;
mod image_search_backend;

pub use chat_plugin::ChatPlugin;
pub use image_probe::ImageProbe;
pub use image_search_backend::ImageSearchBackend;
