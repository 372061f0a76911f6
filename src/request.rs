use crate::errors::{PipelineError, Result};
use crate::template::PromptFields;
use crate::utils::split_url_list;
use serde::{Deserialize, Serialize};

/// Value substituted for optional inputs the user left empty
pub const NOT_PROVIDED: &str = "Not provided";

/// Every field name [`InsightRequest::prompt_fields`] supplies
pub const PROMPT_FIELD_NAMES: &[&str] = &[
    "company_information",
    "product_name",
    "company_url",
    "competitors_url",
    "product_category",
    "value_proposition",
    "target_customer",
    "include_strategy",
    "include_competitors",
    "include_financial_metrics",
    "include_leadership",
    "additional_insights",
    "uploaded_file",
    "data_source_url",
    "amazon_best_sellers",
    "google_trends_review",
    "googled_news_search",
];

/// Which report sections the model is asked to include
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSections {
    pub strategy: bool,
    pub competitors: bool,
    pub financial_metrics: bool,
    pub leadership: bool,
}

impl Default for ReportSections {
    fn default() -> Self {
        Self {
            strategy: true,
            competitors: true,
            financial_metrics: true,
            leadership: true,
        }
    }
}

/// Optional market data sources used by the forecast report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketSources {
    pub amazon_best_sellers: Option<String>,
    pub google_trends: Option<String>,
    pub google_news: Option<String>,
}

/// Pre-filled inputs for trying the tool out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoData {
    /// A pre-built PC maker
    Account,
    /// A gaming chair pitched to an office furniture maker
    Forecast,
}

/// Everything a user supplies for one insight report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightRequest {
    pub product_name: String,
    pub company_url: String,
    pub competitor_urls: Vec<String>,
    pub product_category: String,
    pub value_proposition: String,
    pub target_customer: String,
    #[serde(default)]
    pub sections: ReportSections,
    /// Text extracted from an uploaded document
    #[serde(default)]
    pub document_text: Option<String>,
    #[serde(default)]
    pub data_source_url: Option<String>,
    #[serde(default)]
    pub market: MarketSources,
}

/// Gathered context that accompanies a request into the prompt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptContext {
    pub company_information: String,
    /// Scraped data-source text, or `None` to pass the URL through as-is
    pub data_source: Option<String>,
}

impl InsightRequest {
    pub fn new(product_name: impl Into<String>, company_url: impl Into<String>) -> Self {
        Self {
            product_name: product_name.into(),
            company_url: company_url.into(),
            ..Self::default()
        }
    }

    /// Sets competitors from a comma separated list
    pub fn with_competitors(mut self, urls: &str) -> Self {
        self.competitor_urls = split_url_list(urls);
        self
    }

    pub fn demo(data: DemoData) -> Self {
        match data {
            DemoData::Account => Self {
                product_name: "https://nzxt.com/product/player-three-prime".to_string(),
                company_url: "https://nzxt.com".to_string(),
                competitor_urls: vec!["https://buildredux.com".to_string()],
                product_category: "Pre-Built Computer".to_string(),
                value_proposition:
                    "High-end PC for advanced AI, Data Modeling and Video Rendering".to_string(),
                target_customer: "Nerds".to_string(),
                ..Self::default()
            },
            DemoData::Forecast => Self {
                product_name: "gaming chair".to_string(),
                company_url: "https://store.hermanmiller.com/gaming-view-all?lang=en_US"
                    .to_string(),
                competitor_urls: split_url_list(
                    "https://www.ewinracing.com, https://xrockergaming.com, www.razer.com, \
                     https://secretlab.co, https://www.vertagear.com/, https://www.noblechairs.com, \
                     https://www.dxracer.com, https://www.mavix.com/, https://subsonic.com/, \
                     https://www.andaseat.com/",
                ),
                product_category: "Office supplies".to_string(),
                value_proposition: "a high quality 3D enhanced gaming chair for gamers with \
                     speakers, surround sound, vibrations, cupholder and Siri/Alexa \
                     compatibility, priced at $399."
                    .to_string(),
                target_customer: "Gamers".to_string(),
                market: MarketSources {
                    amazon_best_sellers: Some(
                        "https://www.amazon.com/s?k=gaming+chairs&s=exact-aware-popularity-rank"
                            .to_string(),
                    ),
                    google_trends: Some(
                        "https://trends.google.com/trends/explore?geo=US&q=gaming%20chairs"
                            .to_string(),
                    ),
                    google_news: Some(
                        "https://www.google.com/search?q=gaming+chairs&tbm=nws".to_string(),
                    ),
                },
                ..Self::default()
            },
        }
    }

    /// Product name and company URL are required; nothing else is checked
    pub fn validate(&self) -> Result<()> {
        if self.product_name.trim().is_empty() {
            return Err(PipelineError::Input("product name is required".to_string()));
        }
        if self.company_url.trim().is_empty() {
            return Err(PipelineError::Input("company URL is required".to_string()));
        }
        Ok(())
    }

    /// Builds the full field record for prompt substitution
    pub fn prompt_fields(&self, context: &PromptContext) -> PromptFields {
        let document = optional(self.document_text.as_deref());
        let data_source = match &context.data_source {
            Some(scraped) => scraped.clone(),
            None => optional(self.data_source_url.as_deref()),
        };

        PromptFields::new()
            .with("company_information", context.company_information.clone())
            .with("product_name", self.product_name.clone())
            .with("company_url", self.company_url.clone())
            .with("competitors_url", self.competitor_urls.join(", "))
            .with("product_category", self.product_category.clone())
            .with("value_proposition", self.value_proposition.clone())
            .with("target_customer", self.target_customer.clone())
            .with("include_strategy", self.sections.strategy.to_string())
            .with("include_competitors", self.sections.competitors.to_string())
            .with(
                "include_financial_metrics",
                self.sections.financial_metrics.to_string(),
            )
            .with("include_leadership", self.sections.leadership.to_string())
            .with("additional_insights", document.clone())
            .with("uploaded_file", document)
            .with("data_source_url", data_source)
            .with(
                "amazon_best_sellers",
                optional(self.market.amazon_best_sellers.as_deref()),
            )
            .with(
                "google_trends_review",
                optional(self.market.google_trends.as_deref()),
            )
            .with(
                "googled_news_search",
                optional(self.market.google_news.as_deref()),
            )
    }
}

fn optional(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => NOT_PROVIDED.to_string(),
    }
}
