mod anthropic_client;
mod llm_client_factory;
mod openai_compatible_client;

pub use anthropic_client::AnthropicClient;
pub use llm_client_factory::{ConfigurationError, LlmClientFactory};
pub use openai_compatible_client::OpenAiCompatibleClient;
