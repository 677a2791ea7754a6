use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::models::SearchError;
use crate::global_constants::LOG_TAG_SELECTOR;

/// Picks one validated URL uniformly at random.
pub fn select_image<R: Rng + ?Sized>(
    validated_urls: &[String],
    phrase: &str,
    rng: &mut R,
) -> Result<String, SearchError> {
    let Some(chosen) = validated_urls.choose(rng) else {
        log::info!("{} Nothing to choose from for {:?}", LOG_TAG_SELECTOR, phrase);
        return Err(SearchError::NoImageFound {
            phrase: phrase.to_string(),
        });
    };

    log::debug!(
        "{} Chose {} out of {} images",
        LOG_TAG_SELECTOR,
        chosen,
        validated_urls.len()
    );
    Ok(chosen.clone())
}
