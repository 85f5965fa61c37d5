// Python InfoExtractor - uses `python3 -m yt_dlp`
//
// Advantages:
// - Better at bypassing YouTube bot detection
// - Works well with cookies/auth
//
// Disadvantages:
// - Requires Python 3 and yt-dlp module
// - Slightly slower than native binary

use async_trait::async_trait;
use tokio::sync::OnceCell;

use super::errors::ExtractError;
use super::models::RawVideoInfo;
use super::process::{command_succeeds, run_output_with_timeout};
use super::traits::{ExtractScope, ExtractorConfig, InfoExtractor};

/// Python-based info extractor using yt_dlp module
pub struct PythonInfoExtractor {
    python_cmd: String,
    available: OnceCell<bool>,
}

impl PythonInfoExtractor {
    pub fn new(python_cmd: Option<String>) -> Self {
        Self {
            python_cmd: python_cmd.unwrap_or_else(Self::find_python),
            available: OnceCell::new(),
        }
    }

    /// Find Python interpreter
    fn find_python() -> String {
        // Allow override via environment variable (e.g. a venv interpreter)
        std::env::var("YTDLP_PYTHON").unwrap_or_else(|_| "python3".to_string())
    }

    fn build_args(&self, url: &str, config: &ExtractorConfig, scope: ExtractScope) -> Vec<String> {
        let client = config.player_client.as_deref().unwrap_or("web");
        let mut args = vec!["-m".to_string(), "yt_dlp".to_string()];
        args.extend(config.build_args(url, Some(client), scope));
        args
    }
}

#[async_trait]
impl InfoExtractor for PythonInfoExtractor {
    fn name(&self) -> &'static str {
        "python-yt-dlp"
    }

    async fn is_available(&self) -> bool {
        *self
            .available
            .get_or_init(|| async {
                let ok = command_succeeds(&self.python_cmd, &["-c", "import yt_dlp"]).await;
                tracing::debug!(python = %self.python_cmd, available = ok, "probed yt_dlp module");
                ok
            })
            .await
    }

    async fn extract(
        &self,
        url: &str,
        config: &ExtractorConfig,
        scope: ExtractScope,
    ) -> Result<RawVideoInfo, ExtractError> {
        if !self.is_available().await {
            return Err(ExtractError::ToolNotFound(
                "Python yt_dlp module not installed".to_string(),
            ));
        }

        let args = self.build_args(url, config, scope);
        tracing::debug!(python = %self.python_cmd, args = %args.join(" "), "running yt_dlp module");

        let output = run_output_with_timeout(&self.python_cmd, args, config.timeout_seconds).await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExtractError::from(stderr.trim().to_string()));
        }

        RawVideoInfo::from_stdout(&output.stdout)
    }
}
