use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::core::interfaces::adapters::ChatPlugin;
use crate::core::models::{BotSettings, ChatMessage, PluginResponse};
use crate::core::orchestrators::ImageSearchOrchestrator;
use crate::global_constants::{GIS_COMMAND_PREFIX, LOG_TAG_GIS};

/// Handles `gis <phrase>` by replying with a random image URL.
pub struct GisCommandPlugin {
    settings: Arc<BotSettings>,
    image_search: Arc<ImageSearchOrchestrator>,
}

impl GisCommandPlugin {
    pub fn new(settings: Arc<BotSettings>, image_search: Arc<ImageSearchOrchestrator>) -> Self {
        Self {
            settings,
            image_search,
        }
    }

    fn extract_phrase(text: &str) -> Option<&str> {
        let phrase = text.strip_prefix(GIS_COMMAND_PREFIX)?.trim();
        if phrase.is_empty() {
            None
        } else {
            Some(phrase)
        }
    }
}

#[async_trait]
impl ChatPlugin for GisCommandPlugin {
    fn name(&self) -> &str {
        "gis"
    }

    async fn handle(&self, message: &ChatMessage) -> Result<PluginResponse> {
        let Some(phrase) = Self::extract_phrase(&message.text) else {
            return Ok(PluginResponse::pass());
        };

        if self.settings.gis.is_excluded(&message.channel) {
            log::info!(
                "{} Ignoring gis in excluded channel {}",
                LOG_TAG_GIS,
                message.channel
            );
            return Ok(PluginResponse::stop());
        }

        match self.image_search.search(phrase).await {
            Ok(link) => Ok(PluginResponse::reply_and_stop(link)),
            Err(error) => match &self.settings.gis.default {
                Some(default_url) => {
                    log::warn!(
                        "{} Search for {:?} failed ({}), replying with default",
                        LOG_TAG_GIS,
                        phrase,
                        error
                    );
                    Ok(PluginResponse::reply_and_stop(default_url.clone()))
                }
                None => Err(error.into()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{GisSettings, SearchError};
    use crate::test_doubles::{ScriptedProbe, StaticBackend};
    use std::time::Duration;

    fn build_plugin(
        gis_settings: GisSettings,
        backend: StaticBackend,
        probe: ScriptedProbe,
    ) -> (GisCommandPlugin, Arc<StaticBackend>) {
        let backend = Arc::new(backend);
        let image_search = Arc::new(ImageSearchOrchestrator::build(
            backend.clone(),
            Arc::new(probe),
            Duration::from_secs(2),
        ));
        let settings = Arc::new(BotSettings {
            gis: gis_settings,
            ..BotSettings::default()
        });
        (GisCommandPlugin::new(settings, image_search), backend)
    }

    #[test]
    fn test_extract_phrase() {
        assert_eq!(GisCommandPlugin::extract_phrase("gis cute cats"), Some("cute cats"));
        assert_eq!(GisCommandPlugin::extract_phrase("gis    "), None);
        assert_eq!(GisCommandPlugin::extract_phrase("gisfoo"), None);
        assert_eq!(GisCommandPlugin::extract_phrase("say gis cats"), None);
    }

    #[tokio::test]
    async fn test_unrelated_message_passes_through() {
        let (plugin, backend) = build_plugin(
            GisSettings::default(),
            StaticBackend::with_results(vec![]),
            ScriptedProbe::new(),
        );

        let response = plugin
            .handle(&ChatMessage::new("#a", "hello there"))
            .await
            .unwrap();

        assert_eq!(response, PluginResponse::pass());
        assert!(backend.queried_phrases().is_empty());
    }

    #[tokio::test]
    async fn test_replies_with_found_image() {
        let (plugin, backend) = build_plugin(
            GisSettings::default(),
            StaticBackend::with_results(vec!["http://x/b"]),
            ScriptedProbe::new().with_image("http://x/b", "image/gif", Duration::ZERO),
        );

        let response = plugin
            .handle(&ChatMessage::new("#a", "gis dancing"))
            .await
            .unwrap();

        assert_eq!(
            response,
            PluginResponse::reply_and_stop("http://x/b?lol=lol.gif")
        );
        assert_eq!(backend.queried_phrases(), vec!["dancing".to_string()]);
    }

    #[tokio::test]
    async fn test_excluded_channel_stops_without_searching() {
        let (plugin, backend) = build_plugin(
            GisSettings {
                exclude: vec!["#serious".to_string()],
                ..GisSettings::default()
            },
            StaticBackend::with_results(vec!["http://x/b"]),
            ScriptedProbe::new(),
        );

        let response = plugin
            .handle(&ChatMessage::new("#serious", "gis cats"))
            .await
            .unwrap();

        assert_eq!(response, PluginResponse::stop());
        assert!(backend.queried_phrases().is_empty());
    }

    #[tokio::test]
    async fn test_failure_falls_back_to_default_url() {
        let (plugin, _) = build_plugin(
            GisSettings {
                default: Some("http://x/fallback.gif".to_string()),
                ..GisSettings::default()
            },
            StaticBackend::failing("timeout"),
            ScriptedProbe::new(),
        );

        let response = plugin
            .handle(&ChatMessage::new("#a", "gis cats"))
            .await
            .unwrap();

        assert_eq!(response, PluginResponse::reply_and_stop("http://x/fallback.gif"));
    }

    #[tokio::test]
    async fn test_no_image_also_falls_back_to_default_url() {
        let (plugin, _) = build_plugin(
            GisSettings {
                default: Some("http://x/fallback.gif".to_string()),
                ..GisSettings::default()
            },
            StaticBackend::with_results(vec!["http://x/page"]),
            ScriptedProbe::new().with_image("http://x/page", "text/html", Duration::ZERO),
        );

        let response = plugin
            .handle(&ChatMessage::new("#a", "gis cats"))
            .await
            .unwrap();

        assert_eq!(response, PluginResponse::reply_and_stop("http://x/fallback.gif"));
    }

    #[tokio::test]
    async fn test_failure_without_default_is_an_error() {
        let (plugin, _) = build_plugin(
            GisSettings::default(),
            StaticBackend::with_results(vec![]),
            ScriptedProbe::new(),
        );

        let error = plugin
            .handle(&ChatMessage::new("#a", "gis cats"))
            .await
            .unwrap_err();

        assert_eq!(
            error.downcast_ref::<SearchError>(),
            Some(&SearchError::NoResults {
                phrase: "cats".to_string()
            })
        );
    }
}
