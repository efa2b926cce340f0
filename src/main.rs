use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use docquest::application::services::{
    ChatService, ExtractionService, ModificationService, QuestionExtractionService,
};
use docquest::domain::TagCatalog;
use docquest::infrastructure::llm::LlmClientFactory;
use docquest::infrastructure::observability::{TracingConfig, init_tracing};
use docquest::infrastructure::storage::LocalOutputStore;
use docquest::infrastructure::text_processing::ExtractorFactory;
use docquest::presentation::{AppState, Environment, LlmServices, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(&TracingConfig::from_settings(environment, &settings.logging))?;

    let extractor = ExtractorFactory::create(&settings.extraction)?;
    let output_store = Arc::new(LocalOutputStore::new(settings.storage.output_dir.clone())?);
    let extraction_service = Arc::new(
        ExtractionService::new(
            extractor,
            output_store,
            settings.extraction.upload_dir.clone(),
        )
        .context("Failed to prepare upload directory")?,
    );

    let tag_catalog = Arc::new(load_tag_catalog(&settings));

    let llm = match LlmClientFactory::create(&settings.llm) {
        Ok(llm_client) => Some(LlmServices {
            chat: Arc::new(ChatService::new(
                Arc::clone(&llm_client),
                settings.llm.single_max_tokens,
                settings.llm.chat_max_tokens,
            )),
            questions: Arc::new(QuestionExtractionService::new(
                Arc::clone(&llm_client),
                settings.llm.extraction_max_tokens,
            )),
            modification: Arc::new(ModificationService::new(
                Arc::clone(&llm_client),
                Arc::clone(&tag_catalog),
                settings.llm.single_max_tokens,
            )),
        }),
        Err(e) => {
            tracing::warn!(error = %e, "Completion integration disabled");
            None
        }
    };

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server host or port")?;

    let state = AppState {
        extraction_service,
        llm,
        tag_catalog,
        settings: Arc::new(settings),
    };

    let router = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn load_tag_catalog(settings: &Settings) -> TagCatalog {
    let Some(path) = settings.modification.tags_path.as_deref() else {
        tracing::info!("No modification tag catalog configured");
        return TagCatalog::default();
    };

    match TagCatalog::load(path) {
        Ok(catalog) => {
            tracing::info!(path = %path.display(), tags = catalog.len(), "Tag catalog loaded");
            catalog
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Tag catalog unavailable");
            TagCatalog::default()
        }
    }
}
