// InfoExtractor Orchestrator - mode selection and runner fallback
//
// Strategy:
// 1. For YouTube: Python mode preferred (better anti-bot bypass)
// 2. For other sites: CLI mode preferred (faster)
// 3. Auto-fallback to the other runner unless the failure is permanent

use async_trait::async_trait;

use super::cli::CliInfoExtractor;
use super::diagnostics::diagnose_error;
use super::errors::ExtractError;
use super::models::RawVideoInfo;
use super::python::PythonInfoExtractor;
use super::traits::{
    is_youtube_url, ExtractScope, ExtractorConfig, ExtractorMode, InfoExtractor, MetadataSource,
};

/// Orchestrator that manages Python and CLI extractors
pub struct InfoExtractorOrchestrator {
    python: PythonInfoExtractor,
    cli: CliInfoExtractor,
    config: ExtractorConfig,
}

impl InfoExtractorOrchestrator {
    pub fn new(config: ExtractorConfig) -> Self {
        if config.insecure_tls {
            tracing::warn!("TLS certificate verification is disabled for the metadata extractor");
        }

        Self {
            python: PythonInfoExtractor::new(config.python_cmd.clone()),
            cli: CliInfoExtractor::new(config.ytdlp_path.clone()),
            config,
        }
    }

    /// Runner order for a URL under the configured mode
    fn plan(&self, url: &str) -> Vec<&dyn InfoExtractor> {
        match self.config.mode {
            ExtractorMode::Python => vec![&self.python as &dyn InfoExtractor],
            ExtractorMode::Cli => vec![&self.cli as &dyn InfoExtractor],
            ExtractorMode::Auto if is_youtube_url(url) => {
                vec![&self.python as &dyn InfoExtractor, &self.cli]
            }
            ExtractorMode::Auto => vec![&self.cli as &dyn InfoExtractor, &self.python],
        }
    }

    /// Get availability status
    pub async fn get_status(&self) -> OrchestratorStatus {
        OrchestratorStatus {
            python_available: self.python.is_available().await,
            cli_available: self.cli.is_available().await,
            mode: self.config.mode,
        }
    }

    async fn extract(&self, url: &str, scope: ExtractScope) -> Result<RawVideoInfo, ExtractError> {
        let mut last_error: Option<ExtractError> = None;

        for runner in self.plan(url) {
            if !runner.is_available().await {
                tracing::debug!(runner = runner.name(), "runner unavailable, skipping");
                last_error.get_or_insert(ExtractError::ToolNotFound(runner.name().to_string()));
                continue;
            }

            match runner.extract(url, &self.config, scope).await {
                Ok(info) => {
                    tracing::debug!(runner = runner.name(), "extraction succeeded");
                    return Ok(info);
                }
                Err(e) => {
                    let reason = diagnose_error(&e.to_string());
                    tracing::warn!(
                        runner = runner.name(),
                        reason = reason.map(|r| r.description()).unwrap_or("none"),
                        error = %e,
                        "extraction failed"
                    );

                    let permanent = reason.is_some_and(|r| r.is_permanent())
                        || matches!(e, ExtractError::Unavailable(_));
                    last_error = Some(e);
                    if permanent {
                        break;
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            ExtractError::ToolNotFound("Neither Python yt_dlp nor yt-dlp binary available".to_string())
        }))
    }
}

#[async_trait]
impl MetadataSource for InfoExtractorOrchestrator {
    async fn fetch(&self, url: &str) -> Result<RawVideoInfo, ExtractError> {
        self.extract(url, ExtractScope::Full).await
    }

    async fn fetch_basic(&self, url: &str) -> Result<RawVideoInfo, ExtractError> {
        self.extract(url, ExtractScope::Basic).await
    }
}

/// Status of the orchestrator
#[derive(Debug, Clone)]
pub struct OrchestratorStatus {
    pub python_available: bool,
    pub cli_available: bool,
    pub mode: ExtractorMode,
}
