// CLI InfoExtractor - uses native `yt-dlp` binary
//
// Advantages:
// - Faster than Python mode
// - No Python dependency
//
// Disadvantages:
// - More likely to trigger YouTube bot detection
// - May require different player clients

use async_trait::async_trait;
use std::path::Path;
use tokio::sync::OnceCell;

use super::diagnostics::diagnose_error;
use super::errors::ExtractError;
use super::models::RawVideoInfo;
use super::process::{command_succeeds, run_output_with_timeout};
use super::traits::{is_youtube_url, ExtractScope, ExtractorConfig, InfoExtractor};

/// CLI-based info extractor using yt-dlp binary
pub struct CliInfoExtractor {
    ytdlp_path: String,
    available: OnceCell<bool>,
}

impl CliInfoExtractor {
    pub fn new(ytdlp_path: Option<String>) -> Self {
        Self {
            ytdlp_path: ytdlp_path.unwrap_or_else(Self::find_ytdlp),
            available: OnceCell::new(),
        }
    }

    /// Find yt-dlp binary
    fn find_ytdlp() -> String {
        if let Ok(custom) = std::env::var("YTDLP_PATH") {
            return custom;
        }

        let common_paths = [
            "/opt/homebrew/bin/yt-dlp", // Homebrew on Apple Silicon
            "/usr/local/bin/yt-dlp",    // Homebrew on Intel Mac / pip
            "/usr/bin/yt-dlp",          // System installation
        ];

        common_paths
            .iter()
            .find(|path| Path::new(path).exists())
            .map(|path| path.to_string())
            .unwrap_or_else(|| "yt-dlp".to_string())
    }

    /// Player clients to try, in order
    fn clients_for(url: &str, config: &ExtractorConfig) -> Vec<Option<String>> {
        if let Some(client) = &config.player_client {
            return vec![Some(client.clone())];
        }

        if !is_youtube_url(url) {
            return vec![None];
        }

        // android is faster and less likely to be blocked,
        // web is the fallback for age-gated content
        let clients: &[&str] = if config.cookies_path.is_some() {
            &["web", "android"]
        } else {
            &["android", "tv", "web"]
        };

        clients.iter().map(|c| Some(c.to_string())).collect()
    }

    /// Try extraction with multiple player clients
    async fn try_with_clients(
        &self,
        url: &str,
        config: &ExtractorConfig,
        scope: ExtractScope,
    ) -> Result<RawVideoInfo, ExtractError> {
        let mut last_error = ExtractError::Unknown("No clients to try".to_string());

        for client in Self::clients_for(url, config) {
            let args = config.build_args(url, client.as_deref(), scope);
            let client_name = client.as_deref().unwrap_or("default");
            tracing::debug!(client = client_name, "trying yt-dlp client");

            let output = run_output_with_timeout(&self.ytdlp_path, args, config.timeout_seconds).await;

            match output {
                Ok(out) if out.status.success() => {
                    tracing::debug!(client = client_name, "yt-dlp client succeeded");
                    return RawVideoInfo::from_stdout(&out.stdout);
                }
                Ok(out) => {
                    let stderr = String::from_utf8_lossy(&out.stderr).trim().to_string();
                    tracing::debug!(client = client_name, error = %stderr, "yt-dlp client failed");

                    // Another client will not bring a deleted or private video back
                    let permanent = diagnose_error(&stderr).is_some_and(|r| r.is_permanent());
                    last_error = ExtractError::from(stderr);
                    if permanent {
                        break;
                    }
                }
                Err(e) => {
                    tracing::debug!(client = client_name, error = %e, "yt-dlp client error");
                    last_error = e;
                }
            }
        }

        Err(last_error)
    }
}

#[async_trait]
impl InfoExtractor for CliInfoExtractor {
    fn name(&self) -> &'static str {
        "cli-yt-dlp"
    }

    async fn is_available(&self) -> bool {
        *self
            .available
            .get_or_init(|| async {
                let ok = command_succeeds(&self.ytdlp_path, &["--version"]).await;
                tracing::debug!(path = %self.ytdlp_path, available = ok, "probed yt-dlp binary");
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
                "yt-dlp binary not found".to_string(),
            ));
        }

        self.try_with_clients(url, config, scope).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

    #[test]
    fn prefers_android_without_cookies() {
        let clients = CliInfoExtractor::clients_for(URL, &ExtractorConfig::default());
        let names: Vec<_> = clients.iter().map(|c| c.as_deref().unwrap()).collect();
        assert_eq!(names, ["android", "tv", "web"]);
    }

    #[test]
    fn prefers_web_with_cookies() {
        let config = ExtractorConfig::default().with_cookies_path(Some("cookies.txt".into()));
        let clients = CliInfoExtractor::clients_for(URL, &config);
        assert_eq!(clients[0].as_deref(), Some("web"));
    }

    #[test]
    fn explicit_client_wins() {
        let config = ExtractorConfig::default().with_player_client(Some("tv".into()));
        assert_eq!(CliInfoExtractor::clients_for(URL, &config), vec![Some("tv".to_string())]);
    }
}
