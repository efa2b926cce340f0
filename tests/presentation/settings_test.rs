use std::path::PathBuf;

use docquest::presentation::Environment;
use docquest::presentation::config::{ExtractorProvider, LlmProvider, Settings};

#[test]
fn given_no_overrides_when_loading_defaults_then_documented_values_apply() {
    let settings = Settings::defaults().unwrap();

    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.server.port, 8000);
    assert_eq!(settings.server.max_upload_size_mb, 50);
    assert_eq!(settings.cors.allowed_origins, vec!["http://localhost:5173"]);
    assert_eq!(settings.llm.provider, LlmProvider::Anthropic);
    assert_eq!(settings.llm.single_max_tokens, 1024);
    assert_eq!(settings.llm.chat_max_tokens, 2048);
    assert_eq!(settings.llm.extraction_max_tokens, 4096);
    assert!(settings.llm.api_key.is_none());
    assert_eq!(settings.extraction.provider, ExtractorProvider::Docling);
    assert_eq!(settings.extraction.docling_url, "http://localhost:5001");
    assert_eq!(settings.extraction.upload_dir, PathBuf::from("uploads"));
    assert_eq!(settings.storage.output_dir, PathBuf::from("outputs"));
    assert!(settings.modification.tags_path.is_none());
    assert!(!settings.logging.enable_json);
}

#[test]
fn given_known_names_when_parsing_environment_then_aliases_resolve() {
    assert_eq!(Environment::try_from("local".to_string()), Ok(Environment::Local));
    assert_eq!(Environment::try_from("Development".to_string()), Ok(Environment::Local));
    assert_eq!(Environment::try_from("test".to_string()), Ok(Environment::Test));
    assert_eq!(Environment::try_from("production".to_string()), Ok(Environment::Prod));
}

#[test]
fn given_unknown_name_when_parsing_environment_then_error_lists_choices() {
    let err = Environment::try_from("staging".to_string()).unwrap_err();
    assert!(err.contains("local, test, or prod"));
}

#[test]
fn given_environment_when_resolving_settings_file_then_uses_lowercase_name() {
    assert_eq!(Environment::Prod.settings_file(), "appsettings.prod");
    assert_eq!(Environment::Local.to_string(), "local");
}

#[test]
fn given_provider_when_resolving_key_variable_then_conventional_name_is_used() {
    assert_eq!(LlmProvider::Anthropic.api_key_env(), "ANTHROPIC_API_KEY");
    assert_eq!(LlmProvider::OpenAi.api_key_env(), "OPENAI_API_KEY");
}
