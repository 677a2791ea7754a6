/// Header-level facts about a candidate URL, read without fetching its body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    /// URL after following redirects.
    pub final_url: String,
    pub content_type: Option<String>,
}

impl ProbeReport {
    pub fn new(final_url: impl Into<String>, content_type: Option<String>) -> Self {
        Self {
            final_url: final_url.into(),
            content_type,
        }
    }
}
