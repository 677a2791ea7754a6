use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, CONTENT_TYPE};

use crate::core::interfaces::adapters::ImageProbe;
use crate::core::models::ProbeReport;
use crate::global_constants::LOG_TAG_PROBE;

/// Reads only response headers. Redirects are followed by the client.
pub struct HttpImageProbe {
    client: reqwest::Client,
}

impl HttpImageProbe {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

fn content_type_of(headers: &HeaderMap) -> Option<String> {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[async_trait]
impl ImageProbe for HttpImageProbe {
    async fn probe(&self, url: &str) -> Result<ProbeReport> {
        let head_response = self
            .client
            .head(url)
            .send()
            .await
            .with_context(|| format!("HEAD {} failed", url))?;

        // some hosts reject HEAD; the GET body is never read
        let response = if head_response.status().is_success() {
            head_response
        } else {
            log::debug!(
                "{} HEAD {} returned {}, retrying with GET",
                LOG_TAG_PROBE,
                url,
                head_response.status()
            );
            self.client
                .get(url)
                .send()
                .await
                .with_context(|| format!("GET {} failed", url))?
        };

        let response = response
            .error_for_status()
            .with_context(|| format!("Probe of {} returned an error status", url))?;

        let report = ProbeReport::new(response.url().as_str(), content_type_of(response.headers()));
        log::debug!(
            "{} {} -> {} ({:?})",
            LOG_TAG_PROBE,
            url,
            report.final_url,
            report.content_type
        );

        Ok(report)
    }
}
