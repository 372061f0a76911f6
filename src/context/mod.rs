pub mod web;

use crate::results::{ScrapeResult, ScrapeTarget};
use async_trait::async_trait;

pub use web::WebGatherer;

/// Source of page context for the prompt
#[async_trait]
pub trait ContextGatherer: Send + Sync {
    /// Fetches `url` and extracts `target`.
    ///
    /// Never fails outward: problems come back as [`ScrapeResult::Error`].
    async fn fetch(&self, url: &str, target: ScrapeTarget) -> ScrapeResult;
}
