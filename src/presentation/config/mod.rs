mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    CorsSettings, ExtractionSettings, ExtractorProvider, LlmProvider, LlmSettings,
    LoggingSettings, ModificationSettings, ServerSettings, Settings, StorageSettings,
};
