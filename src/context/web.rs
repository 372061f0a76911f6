use crate::config::ScrapeConfig;
use crate::context::ContextGatherer;
use crate::errors::{PipelineError, Result};
use crate::parsers::html;
use crate::results::{ScrapeResult, ScrapeTarget};
use async_trait::async_trait;
use std::time::Duration;
use url::Url;

/// Fetches pages over HTTP with a browser user agent
pub struct WebGatherer {
    client: reqwest::Client,
}

impl WebGatherer {
    pub fn new(config: &ScrapeConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .map_err(|e| PipelineError::Config(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    /// Performs the GET; any non-2xx status is an error
    async fn fetch_html(&self, url: &str) -> Result<String> {
        let parsed = Url::parse(url)
            .map_err(|e| PipelineError::Fetch(format!("invalid URL {}: {}", url, e)))?;

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| PipelineError::Fetch(format!("request to {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PipelineError::Fetch(format!(
                "{} returned HTTP {}",
                url, status
            )));
        }

        response
            .text()
            .await
            .map_err(|e| PipelineError::Fetch(format!("failed to read body of {}: {}", url, e)))
    }
}

#[async_trait]
impl ContextGatherer for WebGatherer {
    async fn fetch(&self, url: &str, target: ScrapeTarget) -> ScrapeResult {
        ::log::info!("Fetching {:?} context from {}", target, url);

        match self.fetch_html(url).await {
            Ok(body) => {
                ::log::debug!("Fetched {} bytes from {}", body.len(), url);
                html::extract(&body, target)
            }
            Err(e) => {
                ::log::warn!("Continuing without context: {}", e);
                ScrapeResult::Error(e.to_string())
            }
        }
    }
}
