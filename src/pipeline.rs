use crate::config::PipelineConfig;
use crate::context::ContextGatherer;
use crate::errors::Result;
use crate::generator::{ChatModel, InsightGenerator};
use crate::report::ReportArtifact;
use crate::request::{InsightRequest, PROMPT_FIELD_NAMES, PromptContext};
use crate::results::{InsightReport, ScrapeResult, ScrapeTarget};
use crate::template::PromptTemplate;

/// Everything produced for one request
#[derive(Debug, Clone)]
pub struct InsightOutcome {
    pub report: InsightReport,
    pub artifact: ReportArtifact,
    /// Context gathered from the company URL
    pub company_context: ScrapeResult,
}

/// Collect, gather, template, generate; one request at a time
pub struct Pipeline<G, M> {
    gatherer: G,
    generator: InsightGenerator<M>,
    template: PromptTemplate,
    target: ScrapeTarget,
    scrape_data_source: bool,
}

impl<G: ContextGatherer, M: ChatModel> Pipeline<G, M> {
    /// Fails with a `Template` error if the template references a field
    /// that requests never supply.
    pub fn new(
        gatherer: G,
        model: M,
        template: PromptTemplate,
        config: &PipelineConfig,
    ) -> Result<Self> {
        template.check_fields(PROMPT_FIELD_NAMES.iter().copied())?;

        Ok(Self {
            gatherer,
            generator: InsightGenerator::new(model),
            template,
            target: config.scrape.target,
            scrape_data_source: config.scrape_data_source,
        })
    }

    pub async fn run(&self, request: &InsightRequest) -> Result<InsightOutcome> {
        request.validate()?;
        ::log::info!(
            "Generating insights for {} at {}",
            request.product_name,
            request.company_url
        );

        let company_context = self
            .gatherer
            .fetch(&request.company_url, self.target)
            .await;

        let data_source = match (&request.data_source_url, self.scrape_data_source) {
            (Some(url), true) if !url.trim().is_empty() => {
                let scraped = self.gatherer.fetch(url, self.target).await;
                Some(scraped.as_context())
            }
            _ => None,
        };

        let context = PromptContext {
            company_information: company_context.as_context(),
            data_source,
        };
        let fields = request.prompt_fields(&context);

        let report = self.generator.generate(&self.template, &fields).await?;
        let artifact = ReportArtifact::from_report(&report);

        Ok(InsightOutcome {
            report,
            artifact,
            company_context,
        })
    }
}
