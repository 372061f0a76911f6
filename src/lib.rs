// Re-export modules
pub mod config;
pub mod context;
pub mod errors;
pub mod generator;
pub mod parsers;
pub mod pipeline;
pub mod prompts;
pub mod report;
pub mod request;
pub mod results;
pub mod template;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types for convenience
pub use errors::{PipelineError, Result};
pub use pipeline::{InsightOutcome, Pipeline};
pub use request::InsightRequest;
pub use results::{InsightReport, ScrapeResult, ScrapeTarget};

use config::PipelineConfig;
use context::WebGatherer;
use generator::OpenAiCompatibleModel;
use prompts::TemplateSource;

/// Main builder for generating an insight report from a request
pub struct Insights {
    request: InsightRequest,
    config: PipelineConfig,
}

impl Insights {
    /// Create a new builder for the given request with default configuration
    pub fn new(request: InsightRequest) -> Self {
        Self {
            request,
            config: PipelineConfig::default(),
        }
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON string
    pub fn with_config_str(mut self, json: &str) -> Result<Self> {
        self.config = PipelineConfig::from_json(json)?;
        Ok(self)
    }

    /// Set the model identifier
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.config.model.model = model.into();
        self
    }

    /// Set the sampling temperature (0.0 to 1.0)
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.config.model.temperature = temperature;
        self
    }

    /// Set where the prompt template comes from
    pub fn with_template(mut self, template: TemplateSource) -> Self {
        self.config.template = template;
        self
    }

    /// Set which part of the company page is used as context
    pub fn with_scrape_target(mut self, target: ScrapeTarget) -> Self {
        self.config.scrape.target = target;
        self
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run the pipeline against the configured web and model endpoints
    pub async fn generate(self) -> Result<InsightOutcome> {
        self.request.validate()?;
        self.config.validate()?;

        let template = self.config.template.load()?;
        template.check_fields(request::PROMPT_FIELD_NAMES.iter().copied())?;

        let gatherer = WebGatherer::new(&self.config.scrape)?;
        let model = OpenAiCompatibleModel::from_config(&self.config.model)?;

        let pipeline = Pipeline::new(gatherer, model, template, &self.config)?;
        pipeline.run(&self.request).await
    }
}
