use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::LlmClient;
use crate::presentation::config::{LlmProvider, LlmSettings};

use super::anthropic_client::{self, AnthropicClient};
use super::openai_compatible_client::{self, OpenAiCompatibleClient};

/// Raised once at startup. The completion integration stays disabled for the
/// lifetime of the process; everything else keeps running.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("{env_var} is not set; the {provider} completion integration is disabled")]
    MissingApiKey {
        provider: &'static str,
        env_var: &'static str,
    },
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

pub struct LlmClientFactory;

impl LlmClientFactory {
    pub fn create(settings: &LlmSettings) -> Result<Arc<dyn LlmClient>, ConfigurationError> {
        let api_key = settings
            .api_key
            .as_deref()
            .ok_or(ConfigurationError::MissingApiKey {
                provider: settings.provider.as_str(),
                env_var: settings.provider.api_key_env(),
            })?;
        let timeout = Duration::from_secs(settings.request_timeout_secs);

        match settings.provider {
            LlmProvider::Anthropic => {
                let base_url = settings
                    .base_url
                    .as_deref()
                    .unwrap_or(anthropic_client::DEFAULT_BASE_URL);
                tracing::info!(model = %settings.model, base_url, "Using Anthropic completion client");
                Ok(Arc::new(AnthropicClient::new(
                    base_url,
                    api_key,
                    &settings.model,
                    timeout,
                )?))
            }
            LlmProvider::OpenAi => {
                let base_url = settings
                    .base_url
                    .as_deref()
                    .unwrap_or(openai_compatible_client::DEFAULT_BASE_URL);
                tracing::info!(model = %settings.model, base_url, "Using OpenAI-compatible completion client");
                Ok(Arc::new(OpenAiCompatibleClient::new(
                    base_url,
                    api_key,
                    &settings.model,
                    timeout,
                )?))
            }
        }
    }
}
