//! The analyze module sends the built prompt to the configured LLM and
//! normalizes provider failures to a single user-facing error.

use std::str::FromStr;

use llm::builder::{LLMBackend, LLMBuilder};
use llm::chat::{ChatMessage, ChatProvider};
use log::error;
use thiserror::Error;
use url::Url;

use crate::constants::MODEL_API_KEY_ENV_NAME;
use crate::form::FormData;
use crate::prompt::build_prompt;

/// Fatal configuration problems detected at process start.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{MODEL_API_KEY_ENV_NAME} environment variable not set")]
    MissingApiKey,
    #[error("Invalid model URL: {0}")]
    InvalidModel(String),
}

/// Provider or transport failure during analysis. The underlying error is
/// logged; callers only see this fixed message.
#[derive(Debug, Error)]
#[error("Failed to get analysis from AI. Please check your API key and try again.")]
pub struct AnalysisError;

/// Validated provider configuration: backend, model name and credential.
///
/// Model identifiers are written as backend URLs, e.g.
/// `google://gemini-2.5-flash` or `ollama://qwen3`, where the scheme selects
/// the backend and the host names the model.
pub struct AnalysisConfig {
    backend: LLMBackend,
    model: String,
    api_key: String,
}

impl AnalysisConfig {
    /// Resolves the configuration from the model URL and the API key
    /// environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the model URL does not parse, its scheme names no
    /// known backend, or the API key variable is absent.
    pub fn from_env(model_url: &str) -> Result<Self, ConfigError> {
        let parsed =
            Url::parse(model_url).map_err(|err| ConfigError::InvalidModel(err.to_string()))?;
        let backend = LLMBackend::from_str(parsed.scheme())
            .map_err(|err| ConfigError::InvalidModel(err.to_string()))?;
        let model = parsed
            .host_str()
            .ok_or_else(|| ConfigError::InvalidModel("missing model name".to_string()))?
            .to_string();
        let api_key =
            std::env::var(MODEL_API_KEY_ENV_NAME).map_err(|_| ConfigError::MissingApiKey)?;

        Ok(Self {
            backend,
            model,
            api_key,
        })
    }

    /// Builds the chat provider for this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the `llm` backend rejects the configuration.
    pub fn build_provider(&self) -> Result<Box<dyn llm::LLMProvider>, ConfigError> {
        LLMBuilder::new()
            .backend(self.backend.clone())
            .model(self.model.clone())
            .api_key(self.api_key.clone())
            .build()
            .map_err(|err| ConfigError::InvalidModel(err.to_string()))
    }
}

/// Builds the prompt from `form` and requests a single completion.
///
/// The response Markdown is returned verbatim; it is display-only text and
/// is never parsed or validated here.
///
/// # Errors
///
/// Returns [`AnalysisError`] on any provider or transport failure. The
/// provider's own error text is logged, not surfaced.
pub async fn run_analysis(
    form: &FormData,
    model: &dyn ChatProvider,
) -> Result<String, AnalysisError> {
    let prompt = build_prompt(form);
    let messages = vec![ChatMessage::user().content(prompt).build()];

    match model.chat(&messages).await {
        Ok(response) => Ok(response.to_string()),
        Err(err) => {
            error!("Error generating meta tag analysis: {err}");
            Err(AnalysisError)
        }
    }
}
