use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::config::CorsSettings;
use crate::presentation::handlers::{
    download_handler, extract_handler, extract_questions_handler, health_handler,
    history_handler, list_files_handler, message_handler, modify_handler, reset_handler,
    tags_handler, test_connection_handler,
};
use crate::presentation::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.settings.cors);
    let upload_limit = state.settings.server.max_upload_size_mb * 1024 * 1024;

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/", get(health_handler))
        .route("/health", get(health_handler))
        .nest("/api/llm", llm_routes())
        .nest("/api/claude", llm_routes())
        .route("/api/extract-questions", post(extract_questions_handler))
        .route(
            "/extract",
            post(extract_handler).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/download/{filename}", get(download_handler))
        .route("/files", get(list_files_handler))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}

/// Completion endpoints, mounted under both the neutral and the legacy prefix.
fn llm_routes() -> Router<AppState> {
    Router::new()
        .route("/test", post(test_connection_handler))
        .route("/message", post(message_handler))
        .route("/reset", post(reset_handler))
        .route("/history", get(history_handler))
        .route("/modify", post(modify_handler))
        .route("/tags", get(tags_handler))
}

fn cors_layer(settings: &CorsSettings) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request());

    if settings.allowed_origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = settings
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
}
