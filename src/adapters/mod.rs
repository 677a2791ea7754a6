mod google_image_search_backend;
mod http_image_probe;

pub use google_image_search_backend::GoogleImageSearchBackend;
pub use http_image_probe::HttpImageProbe;
