use crate::errors::{PipelineError, Result};
use crate::prompts::TemplateSource;
use crate::results::ScrapeTarget;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Chat model settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Model identifier sent with each request
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature, 0.0 to 1.0
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Base URL of the OpenAI-compatible API
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Name of the environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

/// Context gathering settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// Part of the company page used as context
    #[serde(default)]
    pub target: ScrapeTarget,

    /// User-Agent header sent with every fetch
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Request timeout; `None` keeps the HTTP client default
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Per-request pipeline configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PipelineConfig {
    #[serde(default)]
    pub model: ModelConfig,

    #[serde(default)]
    pub scrape: ScrapeConfig,

    #[serde(default)]
    pub template: TemplateSource,

    /// Fetch the extra data-source URL instead of passing it through verbatim
    #[serde(default)]
    pub scrape_data_source: bool,
}

fn default_model() -> String {
    "llama-3.3-70b-versatile".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_api_base() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_api_key_env() -> String {
    "GROQ_API_KEY".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/124.0.0.0 Safari/537.36"
        .to_string()
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_temperature(),
            api_base: default_api_base(),
            api_key_env: default_api_key_env(),
        }
    }
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            target: ScrapeTarget::default(),
            user_agent: default_user_agent(),
            timeout_secs: None,
        }
    }
}

impl PipelineConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            PipelineError::Config(format!(
                "failed to read {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Applies `INSIGHTS_MODEL` and `INSIGHTS_API_BASE` when they are set
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(model) = lookup("INSIGHTS_MODEL").filter(|v| !v.is_empty()) {
            self.model.model = model;
        }
        if let Some(api_base) = lookup("INSIGHTS_API_BASE").filter(|v| !v.is_empty()) {
            self.model.api_base = api_base;
        }
    }

    pub fn validate(&self) -> Result<()> {
        let temperature = self.model.temperature;
        if !(0.0..=1.0).contains(&temperature) {
            return Err(PipelineError::Config(format!(
                "temperature must be between 0.0 and 1.0, got {}",
                temperature
            )));
        }
        if self.model.model.trim().is_empty() {
            return Err(PipelineError::Config("model must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompts::BuiltinTemplate;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();

        assert_eq!(config.model.model, "llama-3.3-70b-versatile");
        assert_eq!(config.model.temperature, 0.7);
        assert_eq!(config.model.api_key_env, "GROQ_API_KEY");
        assert_eq!(config.scrape.target, ScrapeTarget::Paragraphs);
        assert!(config.scrape.user_agent.starts_with("Mozilla/5.0"));
        assert_eq!(config.scrape.timeout_secs, None);
        assert_eq!(
            config.template,
            TemplateSource::Builtin(BuiltinTemplate::Account)
        );
        assert!(!config.scrape_data_source);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = PipelineConfig::from_json(
            r#"{"model": {"temperature": 0.2}, "scrape": {"target": "meta"}}"#,
        )
        .unwrap();

        assert_eq!(config.model.temperature, 0.2);
        assert_eq!(config.model.api_base, "https://api.groq.com/openai/v1");
        assert_eq!(config.scrape.target, ScrapeTarget::Meta);
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let err = PipelineConfig::from_json("{not json").unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"template": {{"builtin": "basic"}}, "scrape_data_source": true}}"#
        )
        .unwrap();

        let config = PipelineConfig::from_file(file.path()).unwrap();
        assert_eq!(config.template, TemplateSource::Builtin(BuiltinTemplate::Basic));
        assert!(config.scrape_data_source);
    }

    #[test]
    fn test_temperature_out_of_range() {
        let mut config = PipelineConfig::default();
        config.model.temperature = 1.5;

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("temperature"));
    }

    #[test]
    fn test_overrides_skip_empty_values() {
        let mut config = PipelineConfig::default();
        config.apply_overrides(|name| match name {
            "INSIGHTS_MODEL" => Some("mixtral-8x7b-32768".to_string()),
            "INSIGHTS_API_BASE" => Some(String::new()),
            _ => None,
        });

        assert_eq!(config.model.model, "mixtral-8x7b-32768");
        assert_eq!(config.model.api_base, "https://api.groq.com/openai/v1");
    }
}
