use crate::config::ModelConfig;
use crate::errors::{PipelineError, Result};
use crate::results::InsightReport;
use crate::template::{PromptFields, PromptTemplate};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A remote chat-completion model
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Submits `prompt` as a single system message and returns the reply
    async fn complete(&self, prompt: &str) -> Result<InsightReport>;
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Value,
}

/// Chat model reached through an OpenAI-compatible `/chat/completions` API
pub struct OpenAiCompatibleModel {
    client: reqwest::Client,
    config: ModelConfig,
    api_key: SecretString,
}

impl OpenAiCompatibleModel {
    pub fn new(config: ModelConfig, api_key: SecretString) -> Result<Self> {
        if api_key.expose_secret().trim().is_empty() {
            return Err(PipelineError::Auth("API key is empty".to_string()));
        }

        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| PipelineError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    /// Reads the API key from the environment variable named in `config`.
    ///
    /// Fails with an `Auth` error before any network call when it is unset.
    pub fn from_config(config: &ModelConfig) -> Result<Self> {
        let api_key = std::env::var(&config.api_key_env).map_err(|_| {
            PipelineError::Auth(format!(
                "{} is not set; export it or add it to .env",
                config.api_key_env
            ))
        })?;
        Self::new(config.clone(), SecretString::from(api_key))
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.api_base.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl ChatModel for OpenAiCompatibleModel {
    async fn complete(&self, prompt: &str) -> Result<InsightReport> {
        let body = ChatCompletionRequest {
            model: &self.config.model,
            temperature: self.config.temperature,
            messages: vec![ChatMessage {
                role: "system",
                content: prompt,
            }],
        };

        ::log::info!(
            "Requesting completion from {} (temperature {})",
            self.config.model,
            self.config.temperature
        );

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| PipelineError::Generation(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .text()
                .await
                .unwrap_or_else(|_| "no response body".to_string());
            return Err(PipelineError::Generation(format!(
                "model API returned {}: {}",
                status, detail
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| PipelineError::Generation(format!("malformed response: {}", e)))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| PipelineError::Generation("response has no choices".to_string()))?;

        InsightReport::from_content(content).ok_or_else(|| {
            PipelineError::Generation("response content is neither text nor an object".to_string())
        })
    }
}

/// Fills a template and hands it to a chat model
pub struct InsightGenerator<M> {
    model: M,
}

impl<M: ChatModel> InsightGenerator<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// Renders `template` with `fields` and submits it.
    ///
    /// A missing field fails before the model is contacted.
    pub async fn generate(
        &self,
        template: &PromptTemplate,
        fields: &PromptFields,
    ) -> Result<InsightReport> {
        let prompt = template.render(fields)?;
        ::log::debug!(
            "Rendered prompt ({} chars): {}",
            prompt.len(),
            crate::utils::preview(&prompt, 120)
        );

        let report = self.model.complete(&prompt).await?;
        ::log::info!("Model returned a report");
        Ok(report)
    }

    pub fn model(&self) -> &M {
        &self.model
    }
}
