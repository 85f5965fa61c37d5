pub mod api;
pub mod config;
pub mod extractor;
pub mod video;

use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use api::AppState;
use config::{AppConfig, LoggingConfig};
use extractor::{FallbackSource, InfoExtractorOrchestrator, MetadataSource, OEmbedClient};
use video::VideoInfoService;

/// Install the global subscriber. `RUST_LOG` wins over the config.
pub fn init_logging(logging: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.directives()));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

/// Wire the primary source and the configured fallback into a service
pub fn build_service(
    config: &AppConfig,
    source: Arc<dyn MetadataSource>,
) -> Result<VideoInfoService, Box<dyn std::error::Error>> {
    let fallback: Option<Arc<dyn FallbackSource>> = if config.fallback.enabled {
        Some(Arc::new(OEmbedClient::new(
            config.fallback.endpoint.clone(),
            config.fallback.timeout_seconds,
            config.fallback.insecure_tls,
        )?))
    } else {
        None
    };

    Ok(VideoInfoService::new(source, fallback))
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_logging(&config.logging);

    // Probed once here; the cached availability carries over to requests
    let orchestrator = Arc::new(InfoExtractorOrchestrator::new(config.extractor.clone()));
    let status = orchestrator.get_status().await;
    info!(
        mode = %status.mode,
        python = status.python_available,
        cli = status.cli_available,
        "Metadata extractor status"
    );
    if !status.python_available && !status.cli_available {
        tracing::warn!("yt-dlp not found; lookups will rely on the oEmbed fallback");
    }
    if !config.fallback.enabled {
        info!("oEmbed fallback disabled");
    }

    let state = Arc::new(AppState {
        service: build_service(&config, orchestrator)?,
    });
    let app = api::router(state);

    let address = config.server.socket_addr()?;
    info!("Video Info API listening on {}", address);

    let listener = tokio::net::TcpListener::bind(address).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
