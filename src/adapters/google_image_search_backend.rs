use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

use crate::core::interfaces::adapters::ImageSearchBackend;
use crate::global_constants::LOG_TAG_BACKEND;

// the service sometimes sends `"responseData": null` or `"results": null`
#[derive(Debug, Deserialize)]
struct GisResponse {
    #[serde(rename = "responseData", alias = "ResponseData", default)]
    response_data: Option<GisResponseData>,
}

#[derive(Debug, Deserialize)]
struct GisResponseData {
    #[serde(alias = "Results", default)]
    results: Option<Vec<GisResult>>,
}

#[derive(Debug, Deserialize)]
struct GisResult {
    #[serde(alias = "Url", default)]
    url: String,
}

pub struct GoogleImageSearchBackend {
    client: reqwest::Client,
    search_url: String,
}

impl GoogleImageSearchBackend {
    pub fn new(client: reqwest::Client, search_url: String) -> Self {
        Self { client, search_url }
    }

    fn construct_search_url(&self, phrase: &str) -> String {
        format!("{}{}", self.search_url, urlencoding::encode(phrase))
    }
}

fn parse_search_response(body: &str) -> Result<Vec<String>> {
    let response: GisResponse =
        serde_json::from_str(body).context("Failed to decode image search response")?;

    let results = response
        .response_data
        .and_then(|data| data.results)
        .unwrap_or_default();

    Ok(results.into_iter().map(|result| result.url).collect())
}

#[async_trait]
impl ImageSearchBackend for GoogleImageSearchBackend {
    async fn query(&self, phrase: &str) -> Result<Vec<String>> {
        let search_url = self.construct_search_url(phrase);
        log::debug!("{} GET {}", LOG_TAG_BACKEND, search_url);

        let response = self
            .client
            .get(&search_url)
            .send()
            .await
            .context("Image search request failed")?
            .error_for_status()
            .context("Image search returned an error status")?;

        let response_text = response
            .text()
            .await
            .context("Failed to read image search response")?;
        log::debug!("{} Response: {}", LOG_TAG_BACKEND, response_text);

        parse_search_response(&response_text)
    }
}
