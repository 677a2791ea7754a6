use thiserror::Error;

/// Failure of one `search` invocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The backend request failed or its body could not be decoded.
    #[error("Image search backend failed: {0}")]
    Backend(String),

    /// The backend answered but had no results.
    #[error("No results were returned for query {phrase}")]
    NoResults { phrase: String },

    /// No candidate validated as an image before the deadline.
    #[error("No image could be found for \"{phrase}\"")]
    NoImageFound { phrase: String },
}

/// Why a single candidate was rejected. Absorbed by the validator pool.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeFailure {
    #[error("Probe request failed for {url}: {reason}")]
    Request { url: String, reason: String },

    #[error("Not an image: {url} ({content_type})")]
    NotAnImage { url: String, content_type: String },

    #[error("Could not normalize {url}: {reason}")]
    Normalization { url: String, reason: String },
}
