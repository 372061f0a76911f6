use thiserror::Error;

/// Errors raised while assembling and generating an insight report.
///
/// `Fetch` and `Extraction` are recovered where they happen and turned into
/// degraded inputs; every other variant aborts the current request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PipelineError {
    #[error("Input error: {0}")]
    Input(String),

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Error extracting text: {0}")]
    Extraction(String),

    #[error("Template error: no value supplied for placeholder '{{{0}}}'")]
    Template(String),

    #[error("Auth error: {0}")]
    Auth(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl PipelineError {
    pub fn error_code(&self) -> &'static str {
        match self {
            PipelineError::Input(_) => "INPUT_ERROR",
            PipelineError::Fetch(_) => "FETCH_ERROR",
            PipelineError::Extraction(_) => "EXTRACTION_ERROR",
            PipelineError::Template(_) => "TEMPLATE_ERROR",
            PipelineError::Auth(_) => "AUTH_ERROR",
            PipelineError::Generation(_) => "GENERATION_ERROR",
            PipelineError::Config(_) => "CONFIG_ERROR",
        }
    }
}

impl From<serde_json::Error> for PipelineError {
    fn from(err: serde_json::Error) -> Self {
        PipelineError::Config(format!("invalid JSON: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(PipelineError::Input("x".into()).error_code(), "INPUT_ERROR");
        assert_eq!(
            PipelineError::Template("x".into()).error_code(),
            "TEMPLATE_ERROR"
        );
        assert_eq!(
            PipelineError::Generation("x".into()).error_code(),
            "GENERATION_ERROR"
        );
    }

    #[test]
    fn test_error_messages() {
        let err = PipelineError::Template("name".into());
        assert_eq!(
            err.to_string(),
            "Template error: no value supplied for placeholder '{name}'"
        );

        let err = PipelineError::Extraction("bad zip".into());
        assert_eq!(err.to_string(), "Error extracting text: bad zip");
    }
}
