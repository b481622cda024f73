pub mod api;
pub mod catalog;
pub mod config;
pub mod db;
pub mod models;
pub mod pipeline;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::api::{start_server, ApiContext};
use crate::config::{ConfigError, ServerConfig};
use crate::pipeline::translate::TranslationError;
use crate::pipeline::{
    HelpdeskPipeline, HttpTranslator, SimulatedOcr, SqliteConversationStore, StorageError,
    WhatlangDetector,
};

/// Errors that stop the server before it can answer requests.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Cannot open conversation store: {0}")]
    Store(#[from] StorageError),
    #[error("Cannot build translation client: {0}")]
    Translator(#[from] TranslationError),
    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub fn run() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let result = ServerConfig::from_env()
        .map_err(StartupError::from)
        .and_then(serve);

    if let Err(e) = result {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

/// Wire the production collaborators and serve until Ctrl-C.
pub fn serve(config: ServerConfig) -> Result<(), StartupError> {
    let store = SqliteConversationStore::open(&config.db_path)?;
    tracing::info!(path = %config.db_path.display(), "Conversation store opened");

    // The blocking HTTP client must be built and dropped outside the runtime.
    let translator = HttpTranslator::new(
        &config.translate_url,
        config.translate_api_key.clone(),
        config.translate_timeout_secs,
    )?;
    tracing::info!(url = translator.base_url(), "Translation service configured");

    let pipeline = Arc::new(HelpdeskPipeline::new(
        Arc::new(WhatlangDetector),
        Arc::new(translator),
        Arc::new(SimulatedOcr),
        Arc::new(store),
    ));
    let ctx = ApiContext::new(pipeline);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let result: Result<(), StartupError> = runtime.block_on(async {
        let mut server = start_server(ctx.clone(), config.bind_addr).await?;
        tracing::info!(
            addr = %server.addr,
            session = %server.session_id,
            started_at = %server.started_at,
            "Helpdesk listening"
        );

        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Cannot listen for shutdown signal: {e}");
        }
        server.shutdown();
        server.stopped().await;
        Ok(())
    });

    drop(runtime);
    drop(ctx);
    result
}
