use clap::{Parser, ValueEnum};
use sales_insights::config::PipelineConfig;
use sales_insights::errors::{PipelineError, Result};
use sales_insights::parsers::Parser as DocumentParser;
use sales_insights::prompts::{BuiltinTemplate, TemplateSource};
use sales_insights::request::{DemoData, InsightRequest};
use sales_insights::results::ScrapeTarget;
use sales_insights::utils::split_url_list;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sales-insights")]
#[command(about = "Generates account insights for a sales representative from company details, web context and an LLM")]
#[command(version)]
pub struct Args {
    /// What product are you selling?
    #[arg(long)]
    pub product_name: Option<String>,

    /// URL of the company you are targeting
    #[arg(long)]
    pub company_url: Option<String>,

    /// Product category (e.g. "Cloud Data Platform")
    #[arg(long)]
    pub product_category: Option<String>,

    /// Competitor URLs, comma separated
    #[arg(long)]
    pub competitors_url: Option<String>,

    /// A sentence summarizing the product's value
    #[arg(long)]
    pub value_proposition: Option<String>,

    /// The person or audience you are selling to
    #[arg(long)]
    pub target_customer: Option<String>,

    /// Leave out the company strategy section
    #[arg(long)]
    pub no_strategy: bool,

    /// Leave out the competitor analysis section
    #[arg(long)]
    pub no_competitors: bool,

    /// Leave out the financial metrics section
    #[arg(long)]
    pub no_financial_metrics: bool,

    /// Leave out the leadership section
    #[arg(long)]
    pub no_leadership: bool,

    /// PDF or Word document with additional product details
    #[arg(long)]
    pub document: Option<PathBuf>,

    /// Additional data source URL
    #[arg(long)]
    pub data_source_url: Option<String>,

    /// Fetch the data source URL and use its content instead of the URL itself
    #[arg(long)]
    pub scrape_data_source: bool,

    /// Amazon best sellers URL
    #[arg(long)]
    pub amazon_best_sellers: Option<String>,

    /// Google Trends URL
    #[arg(long)]
    pub google_trends: Option<String>,

    /// Google News URL
    #[arg(long)]
    pub google_news: Option<String>,

    /// Pre-fill inputs with demo data (explicit inputs still win)
    #[arg(long, value_enum)]
    pub demo: Option<DemoArg>,

    /// Path to a JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Built-in prompt template
    #[arg(short, long, value_enum)]
    pub template: Option<TemplateArg>,

    /// Prompt template file with {field} placeholders
    #[arg(long, conflicts_with = "template")]
    pub template_file: Option<PathBuf>,

    /// Model identifier
    #[arg(short, long)]
    pub model: Option<String>,

    /// Model temperature (0.0 to 1.0)
    #[arg(long)]
    pub temperature: Option<f32>,

    /// Part of the company page used as context
    #[arg(long, value_enum)]
    pub target: Option<TargetArg>,

    /// Fetch timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Write the report to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum DemoArg {
    Account,
    Forecast,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum TemplateArg {
    Basic,
    Account,
    Forecast,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum TargetArg {
    Meta,
    Headings,
    Paragraphs,
}

/// Convert from CLI demo argument to demo data set
pub fn convert_demo(arg: DemoArg) -> DemoData {
    match arg {
        DemoArg::Account => DemoData::Account,
        DemoArg::Forecast => DemoData::Forecast,
    }
}

/// Convert from CLI template argument to built-in template
pub fn convert_template(arg: TemplateArg) -> BuiltinTemplate {
    match arg {
        TemplateArg::Basic => BuiltinTemplate::Basic,
        TemplateArg::Account => BuiltinTemplate::Account,
        TemplateArg::Forecast => BuiltinTemplate::Forecast,
    }
}

/// Convert from CLI target argument to scrape target
pub fn convert_target(arg: TargetArg) -> ScrapeTarget {
    match arg {
        TargetArg::Meta => ScrapeTarget::Meta,
        TargetArg::Headings => ScrapeTarget::Headings,
        TargetArg::Paragraphs => ScrapeTarget::Paragraphs,
    }
}

fn set_if_some(field: &mut String, value: &Option<String>) {
    if let Some(value) = value {
        *field = value.clone();
    }
}

impl Args {
    /// Builds the request from demo data, explicit flags and the uploaded document
    pub fn build_request(&self) -> Result<InsightRequest> {
        let mut request = match self.demo {
            Some(demo) => InsightRequest::demo(convert_demo(demo)),
            None => InsightRequest::default(),
        };

        set_if_some(&mut request.product_name, &self.product_name);
        set_if_some(&mut request.company_url, &self.company_url);
        set_if_some(&mut request.product_category, &self.product_category);
        set_if_some(&mut request.value_proposition, &self.value_proposition);
        set_if_some(&mut request.target_customer, &self.target_customer);
        if let Some(competitors) = &self.competitors_url {
            request.competitor_urls = split_url_list(competitors);
        }

        request.sections.strategy &= !self.no_strategy;
        request.sections.competitors &= !self.no_competitors;
        request.sections.financial_metrics &= !self.no_financial_metrics;
        request.sections.leadership &= !self.no_leadership;

        if self.data_source_url.is_some() {
            request.data_source_url = self.data_source_url.clone();
        }
        if self.amazon_best_sellers.is_some() {
            request.market.amazon_best_sellers = self.amazon_best_sellers.clone();
        }
        if self.google_trends.is_some() {
            request.market.google_trends = self.google_trends.clone();
        }
        if self.google_news.is_some() {
            request.market.google_news = self.google_news.clone();
        }

        if let Some(path) = &self.document {
            let bytes = std::fs::read(path).map_err(|e| {
                PipelineError::Input(format!("failed to read {}: {}", path.display(), e))
            })?;
            request.document_text = Some(DocumentParser::extract_from_path(&bytes, path));
        }

        Ok(request)
    }

    /// Layers config file, environment overrides, then CLI flags
    pub fn build_config(&self) -> Result<PipelineConfig> {
        let mut config = match &self.config {
            Some(path) => PipelineConfig::from_file(path)?,
            None => PipelineConfig::default(),
        };
        config.apply_env_overrides();

        if let Some(model) = &self.model {
            config.model.model = model.clone();
        }
        if let Some(temperature) = self.temperature {
            config.model.temperature = temperature;
        }
        if let Some(template) = self.template {
            config.template = TemplateSource::Builtin(convert_template(template));
        } else if let Some(path) = &self.template_file {
            config.template = TemplateSource::File(path.clone());
        } else if self.demo == Some(DemoArg::Forecast)
            && config.template == TemplateSource::default()
        {
            // The forecast demo data only shows up in the forecast prompt
            config.template = TemplateSource::Builtin(BuiltinTemplate::Forecast);
        }
        if let Some(target) = self.target {
            config.scrape.target = convert_target(target);
        }
        if let Some(timeout) = self.timeout {
            config.scrape.timeout_secs = Some(timeout);
        }
        if self.scrape_data_source {
            config.scrape_data_source = true;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("sales-insights").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_explicit_fields() {
        let args = parse(&[
            "--product-name",
            "Widget",
            "--company-url",
            "https://example.com",
            "--competitors-url",
            "https://a.example, https://b.example",
            "--no-financial-metrics",
        ]);

        let request = args.build_request().unwrap();
        assert_eq!(request.product_name, "Widget");
        assert_eq!(request.company_url, "https://example.com");
        assert_eq!(
            request.competitor_urls,
            vec!["https://a.example", "https://b.example"]
        );
        assert!(!request.sections.financial_metrics);
        assert!(request.sections.strategy);
        assert_eq!(request.document_text, None);
    }

    #[test]
    fn test_demo_with_override() {
        let args = parse(&["--demo", "account", "--target-customer", "Studios"]);

        let request = args.build_request().unwrap();
        assert_eq!(request.company_url, "https://nzxt.com");
        assert_eq!(request.target_customer, "Studios");
    }

    #[test]
    fn test_missing_document_is_input_error() {
        let args = parse(&["--document", "/nonexistent/overview.pdf"]);

        let err = args.build_request().unwrap_err();
        assert_eq!(err.error_code(), "INPUT_ERROR");
    }

    #[test]
    fn test_unsupported_document_is_not_fatal() {
        let file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        let path = file.path().to_str().unwrap().to_string();
        let args = parse(&["--document", &path]);

        let request = args.build_request().unwrap();
        assert_eq!(
            request.document_text.as_deref(),
            Some(sales_insights::parsers::UNSUPPORTED_FORMAT)
        );
    }

    #[test]
    fn test_config_flags() {
        let args = parse(&[
            "--template",
            "forecast",
            "--model",
            "mixtral-8x7b-32768",
            "--temperature",
            "0.2",
            "--target",
            "meta",
            "--scrape-data-source",
        ]);

        let config = args.build_config().unwrap();
        assert_eq!(
            config.template,
            TemplateSource::Builtin(BuiltinTemplate::Forecast)
        );
        assert_eq!(config.model.model, "mixtral-8x7b-32768");
        assert_eq!(config.model.temperature, 0.2);
        assert_eq!(config.scrape.target, ScrapeTarget::Meta);
        assert!(config.scrape_data_source);
    }

    #[test]
    fn test_forecast_demo_defaults_to_forecast_template() {
        let config = parse(&["--demo", "forecast"]).build_config().unwrap();
        assert_eq!(
            config.template,
            TemplateSource::Builtin(BuiltinTemplate::Forecast)
        );

        let config = parse(&["--demo", "forecast", "--template", "basic"])
            .build_config()
            .unwrap();
        assert_eq!(config.template, TemplateSource::Builtin(BuiltinTemplate::Basic));

        let config = parse(&["--demo", "account"]).build_config().unwrap();
        assert_eq!(config.template, TemplateSource::default());
    }

    #[test]
    fn test_out_of_range_temperature_rejected() {
        let args = parse(&["--temperature", "2.0"]);
        assert!(args.build_config().is_err());
    }

    #[test]
    fn test_template_and_template_file_conflict() {
        let result = Args::try_parse_from([
            "sales-insights",
            "--template",
            "basic",
            "--template-file",
            "prompt.txt",
        ]);
        assert!(result.is_err());
    }
}
