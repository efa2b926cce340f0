use std::path::PathBuf;

use config::{Config, ConfigError, Environment as EnvironmentSource, File};
use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub cors: CorsSettings,
    pub llm: LlmSettings,
    pub extraction: ExtractionSettings,
    pub storage: StorageSettings,
    #[serde(default)]
    pub modification: ModificationSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_size_mb: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub provider: LlmProvider,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
    pub model: String,
    pub request_timeout_secs: u64,
    pub single_max_tokens: u32,
    pub chat_max_tokens: u32,
    pub extraction_max_tokens: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    Anthropic,
    #[serde(rename = "openai")]
    OpenAi,
}

impl LlmProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            LlmProvider::Anthropic => "anthropic",
            LlmProvider::OpenAi => "openai",
        }
    }

    /// Conventional environment variable holding this provider's key.
    pub fn api_key_env(&self) -> &'static str {
        match self {
            LlmProvider::Anthropic => "ANTHROPIC_API_KEY",
            LlmProvider::OpenAi => "OPENAI_API_KEY",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionSettings {
    pub provider: ExtractorProvider,
    pub docling_url: String,
    pub request_timeout_secs: u64,
    pub upload_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractorProvider {
    Docling,
    Local,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModificationSettings {
    #[serde(default)]
    pub tags_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Layers built-in defaults, `appsettings.<env>.toml` and `APP__SECTION__KEY`
    /// variables, in that order.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let config = Self::builder()?
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins"),
            )
            .build()?;

        let mut settings: Settings = config.try_deserialize()?;
        settings.llm.apply_key_fallback();
        Ok(settings)
    }

    /// Defaults only, without reading files or the environment.
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::builder()?.build()?.try_deserialize()
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("server.max_upload_size_mb", 50)?
            .set_default("cors.allowed_origins", vec!["http://localhost:5173"])?
            .set_default("llm.provider", "anthropic")?
            .set_default("llm.model", "claude-opus-4-1")?
            .set_default("llm.request_timeout_secs", 120)?
            .set_default("llm.single_max_tokens", 1024)?
            .set_default("llm.chat_max_tokens", 2048)?
            .set_default("llm.extraction_max_tokens", 4096)?
            .set_default("extraction.provider", "docling")?
            .set_default("extraction.docling_url", "http://localhost:5001")?
            .set_default("extraction.request_timeout_secs", 300)?
            .set_default("extraction.upload_dir", "uploads")?
            .set_default("storage.output_dir", "outputs")?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)
    }
}

impl LlmSettings {
    /// Falls back to the provider's conventional variable when no key is configured.
    fn apply_key_fallback(&mut self) {
        let configured = self.api_key.take().filter(|k| !k.trim().is_empty());
        self.api_key = configured.or_else(|| {
            std::env::var(self.provider.api_key_env())
                .ok()
                .filter(|k| !k.trim().is_empty())
        });
    }
}
