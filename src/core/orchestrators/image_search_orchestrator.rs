use std::sync::Arc;
use std::time::Duration;

use crate::core::interfaces::adapters::{ImageProbe, ImageSearchBackend};
use crate::core::models::SearchError;
use crate::core::orchestrators::image_selector::select_image;
use crate::core::orchestrators::query_dispatcher::QueryDispatcher;
use crate::core::orchestrators::validator_pool::ValidatorPool;
use crate::global_constants::LOG_TAG_GIS;

/// Phrase in, one random image URL out.
pub struct ImageSearchOrchestrator {
    dispatcher: QueryDispatcher,
    validator_pool: ValidatorPool,
}

impl ImageSearchOrchestrator {
    pub fn build(
        backend: Arc<dyn ImageSearchBackend>,
        probe: Arc<dyn ImageProbe>,
        deadline: Duration,
    ) -> Self {
        Self {
            dispatcher: QueryDispatcher::new(backend),
            validator_pool: ValidatorPool::new(probe, deadline),
        }
    }

    /// Backend errors pass through untouched; fallbacks are the caller's business.
    pub async fn search(&self, phrase: &str) -> Result<String, SearchError> {
        log::info!("{} Searching images for {:?}", LOG_TAG_GIS, phrase);

        let candidates = self.dispatcher.dispatch(phrase).await?;
        let summary = self.validator_pool.validate(candidates).await;
        let chosen = select_image(&summary.validated_urls, phrase, &mut rand::thread_rng())?;

        log::info!("{} Found {} for {:?}", LOG_TAG_GIS, chosen, phrase);
        Ok(chosen)
    }
}
