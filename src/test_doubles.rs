use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use crate::core::interfaces::adapters::{ImageProbe, ImageSearchBackend};
use crate::core::models::ProbeReport;

pub struct StaticBackend {
    result: std::result::Result<Vec<String>, String>,
    queried_phrases: Mutex<Vec<String>>,
}

impl StaticBackend {
    pub fn with_results(urls: Vec<&str>) -> Self {
        Self {
            result: Ok(urls.into_iter().map(str::to_string).collect()),
            queried_phrases: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            result: Err(message.to_string()),
            queried_phrases: Mutex::new(Vec::new()),
        }
    }

    pub fn queried_phrases(&self) -> Vec<String> {
        self.queried_phrases.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageSearchBackend for StaticBackend {
    async fn query(&self, phrase: &str) -> Result<Vec<String>> {
        self.queried_phrases.lock().unwrap().push(phrase.to_string());
        self.result
            .clone()
            .map_err(|message| anyhow::anyhow!(message))
    }
}

struct ScriptedResponse {
    delay: Duration,
    result: std::result::Result<ProbeReport, String>,
}

/// Probe that answers from a fixed table, optionally after a delay.
pub struct ScriptedProbe {
    responses: HashMap<String, ScriptedResponse>,
    calls: AtomicUsize,
}

impl ScriptedProbe {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_image(mut self, url: &str, content_type: &str, delay: Duration) -> Self {
        self.responses.insert(
            url.to_string(),
            ScriptedResponse {
                delay,
                result: Ok(ProbeReport::new(url, Some(content_type.to_string()))),
            },
        );
        self
    }

    pub fn with_report(mut self, url: &str, final_url: &str, content_type: Option<String>) -> Self {
        self.responses.insert(
            url.to_string(),
            ScriptedResponse {
                delay: Duration::ZERO,
                result: Ok(ProbeReport::new(final_url, content_type)),
            },
        );
        self
    }

    pub fn with_error(mut self, url: &str, message: &str) -> Self {
        self.responses.insert(
            url.to_string(),
            ScriptedResponse {
                delay: Duration::ZERO,
                result: Err(message.to_string()),
            },
        );
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageProbe for ScriptedProbe {
    async fn probe(&self, url: &str) -> Result<ProbeReport> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let Some(response) = self.responses.get(url) else {
            anyhow::bail!("no scripted response for {}", url);
        };

        if !response.delay.is_zero() {
            tokio::time::sleep(response.delay).await;
        }

        response
            .result
            .clone()
            .map_err(|message| anyhow::anyhow!(message))
    }
}
