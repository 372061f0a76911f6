//! Built-in prompt templates.
//!
//! Every placeholder used here is one of
//! [`PROMPT_FIELD_NAMES`](crate::request::PROMPT_FIELD_NAMES).

use crate::errors::{PipelineError, Result};
use crate::template::PromptTemplate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const BASIC_SUMMARY_PROMPT: &str = "Analyze the following company information and summarize its strategy, key leadership, and mentions of competitors.

- Company Information: {company_information}
- Product Name: {product_name}
- Competitors URL: {competitors_url}
- Product Category: {product_category}
- Value Proposition: {value_proposition}
- Target Customer: {target_customer}
";

pub const ACCOUNT_INSIGHTS_PROMPT: &str = "You are an assistant providing account insights for a sales representative. The insights include:
1. Analysis of the company's product offerings in terms of pricing, performance, and value.
2. A summary of the company's strategy, including any press releases or leadership statements (if selected).
3. Leadership details of the company, including relevant individuals and their roles (if selected).
4. Analysis of the company's financial metrics, such as annual revenue, growth rates, and profit margins (if selected).
5. Identification of competitors and similar comparisons (if selected).
6. Links to supporting articles or references.

Inputs provided are:
- Company Information: {company_information}
- Company URL: {company_url}
- Product Name: {product_name}
- Competitors URL: {competitors_url}
- Product Category: {product_category}
- Value Proposition: {value_proposition}
- Target Customer: {target_customer}
- Include Company Strategy: {include_strategy}
- Include Competitor Analysis: {include_competitors}
- Include Financial Metrics: {include_financial_metrics}
- Include Leadership Insights: {include_leadership}
- Additional Insights: {additional_insights}

Please generate a concise one-page summary with actionable insights for the sales representative.
";

pub const PRODUCT_FORECAST_PROMPT: &str = "You are a business assistant agent tasked with generating a one-page summary to assist a sales representative in gaining insights about a prospective account.
Based on the inputs and additional data provided, your goal is to create a detailed and actionable report.
Avoid assumptions or statements that are not backed by data.
Reflect diverse perspectives and cross-verify data when possible.
Use the following structure:

### Inputs:
- **Company Information**: {company_information}
- **Company URL**: {company_url}
- **Product Name**: {product_name}
- **Competitor URL(s)**: {competitors_url}
- **Product Category**: {product_category}
- **Value Proposition**: {value_proposition}
- **Target Customer**: {target_customer}
- **Uploaded Document**: {uploaded_file} (summarize and add insight into summary, if uploaded).
- **Scraped Data Source**: {data_source_url} (summarize and add insight into summary, if provided).
- **Amazon Best Sellers**: {amazon_best_sellers}
- **Google Trends**: {google_trends_review}
- **Google News**: {googled_news_search}

### Tasks:
1. **Company Strategy**:
- Summarize the company's activities, priorities, and any recent initiatives relevant to the product category.
- Include key public statements, press releases, or job postings that provide insight into the company's strategy.

2. **Competitor Mentions**:
- Extract and analyze data about competitors from the provided URLs and scraped data.
- Create a detailed comparison table with the columns: Competitor Name, Features, Price, Durability, Comparison to Your Product.

3. **Leadership Information**:
- Identify key decision-makers (e.g., CEO, CTO) and summarize relevant public statements or initiatives tied to the product category.

4. **Product/Strategy Summary**:
- Describe the characteristics of the ideal customer in a table.
- Suggest sales channels for the product.

5. **Suggestions for Positioning**:
- Recommend how the product can align with the company's strategy and address the target customer's pain points.

6. **Product Data Analytics**:
- Amazon Best Sellers: summarize the top 5 products (brand, price, rating, key features) in a table.
- Google Trends: summarize the trend data, predict future trends and potential market disruptions, in a table.
- Google News: analyze sentiment and give the 3 to 5 most recent topics, in a table.
- For each, note where the value proposition can provide leverage.

7. **Business Value / Forecast**:
- Use all gathered inputs to forecast the product's potential, with a table of projected profit margin and revenue.

## Ethical Considerations
- Provide actionable insights while mitigating potential biases in decision-making.
- Highlight areas where assumptions or extrapolations are based on limited data.

## Language and Tone
- Use a formal professional tone and persuasive language.

### Final Deliverable:
- Present the report in clear sections: Company Strategy, Competitor Mentions (including table), Leadership Information, Product/Strategy Summary, Recommendations for Positioning.
- Include references or links to supporting data.
- Include a summary of identified biases, if any, and measures taken to mitigate them.

8. ### Closing Statement:
- Conclude with a persuasive note highlighting the product's competitive edge, using call-to-action phrases.
";

/// The prompt variants shipped with the crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuiltinTemplate {
    /// Short strategy / leadership / competitor summary
    Basic,
    /// One-page account insights with optional report sections
    #[default]
    Account,
    /// Detailed report with market data sources and a business forecast
    Forecast,
}

impl BuiltinTemplate {
    pub fn text(&self) -> &'static str {
        match self {
            BuiltinTemplate::Basic => BASIC_SUMMARY_PROMPT,
            BuiltinTemplate::Account => ACCOUNT_INSIGHTS_PROMPT,
            BuiltinTemplate::Forecast => PRODUCT_FORECAST_PROMPT,
        }
    }
}

/// Where the active prompt template comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateSource {
    Builtin(BuiltinTemplate),
    /// Template read from a text file
    File(PathBuf),
    Inline(String),
}

impl Default for TemplateSource {
    fn default() -> Self {
        TemplateSource::Builtin(BuiltinTemplate::default())
    }
}

impl TemplateSource {
    pub fn load(&self) -> Result<PromptTemplate> {
        match self {
            TemplateSource::Builtin(builtin) => Ok(PromptTemplate::new(builtin.text())),
            TemplateSource::File(path) => std::fs::read_to_string(path)
                .map(PromptTemplate::new)
                .map_err(|e| {
                    PipelineError::Config(format!(
                        "failed to read template {}: {}",
                        path.display(),
                        e
                    ))
                }),
            TemplateSource::Inline(text) => Ok(PromptTemplate::new(text.clone())),
        }
    }
}
