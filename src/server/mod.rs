pub mod handlers;
pub mod types;

use crate::{
    Result,
    config::{ApiKey, Config},
    llm::GeminiClient,
    translate::Translator,
};
use axum::{
    Router,
    routing::{any, get},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

pub fn router(state: handlers::AppState) -> Router {
    Router::new()
        .route("/api/translate", any(handlers::translate))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn run(config: Config, api_key: Option<ApiKey>) -> Result<()> {
    let client = GeminiClient::new(config.gemini.clone())?;
    info!("Using Gemini model {}", client.model());

    let translator = Translator::new(Arc::new(client), api_key);
    if !translator.has_api_key() {
        warn!(
            "{} is not set; translation requests will fail with a configuration error",
            config.gemini.api_key_env
        );
    }

    let app_state = handlers::AppState {
        translator: Arc::new(translator),
    };

    let app = router(app_state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
