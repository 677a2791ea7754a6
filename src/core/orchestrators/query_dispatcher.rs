use std::sync::Arc;

use crate::core::interfaces::adapters::ImageSearchBackend;
use crate::core::models::SearchError;
use crate::global_constants::LOG_TAG_DISPATCHER;

pub struct QueryDispatcher {
    backend: Arc<dyn ImageSearchBackend>,
}

impl QueryDispatcher {
    pub fn new(backend: Arc<dyn ImageSearchBackend>) -> Self {
        Self { backend }
    }

    /// Issues one backend query and returns its raw candidate URLs.
    pub async fn dispatch(&self, phrase: &str) -> Result<Vec<String>, SearchError> {
        log::debug!("{} Querying backend for {:?}", LOG_TAG_DISPATCHER, phrase);

        let candidates = self
            .backend
            .query(phrase)
            .await
            .map_err(|error| SearchError::Backend(format!("{:#}", error)))?;

        let candidates: Vec<String> = candidates
            .into_iter()
            .filter(|candidate| !candidate.trim().is_empty())
            .collect();

        if candidates.is_empty() {
            log::info!("{} No results for {:?}", LOG_TAG_DISPATCHER, phrase);
            return Err(SearchError::NoResults {
                phrase: phrase.to_string(),
            });
        }

        log::debug!(
            "{} Backend returned {} candidates",
            LOG_TAG_DISPATCHER,
            candidates.len()
        );
        Ok(candidates)
    }
}
