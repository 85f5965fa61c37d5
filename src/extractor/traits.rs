// Metadata source traits and common extractor configuration

use async_trait::async_trait;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use super::errors::ExtractError;
use super::models::RawVideoInfo;

/// Extraction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractorMode {
    /// Python module yt_dlp (better for YouTube, avoids bot detection)
    Python,
    /// CLI binary yt-dlp (faster, no Python dependency)
    Cli,
    /// Auto-select: Python → CLI fallback
    #[default]
    Auto,
}

impl fmt::Display for ExtractorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Python => write!(f, "python"),
            Self::Cli => write!(f, "cli"),
            Self::Auto => write!(f, "auto"),
        }
    }
}

impl FromStr for ExtractorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "python" => Ok(Self::Python),
            "cli" => Ok(Self::Cli),
            "auto" => Ok(Self::Auto),
            other => Err(format!("unknown extractor mode '{}'", other)),
        }
    }
}

/// How much of the record a caller needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractScope {
    /// Scalar metadata plus every format descriptor
    Full,
    /// Scalar metadata only; a record without formats is acceptable
    Basic,
}

/// Configuration for info extraction
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Extraction mode (Python, CLI, or Auto)
    pub mode: ExtractorMode,
    /// SOCKS5/HTTP proxy URL
    pub proxy: Option<String>,
    /// Path to cookies.txt file
    pub cookies_path: Option<String>,
    /// Request timeout in seconds, also the hard limit for one tool run
    pub timeout_seconds: u64,
    /// YouTube player client (android, web, tv)
    pub player_client: Option<String>,
    /// Custom User-Agent header
    pub user_agent: Option<String>,
    /// Fake X-Forwarded-For to get around geographic restrictions
    pub geo_bypass: bool,
    /// Stream types the extractor should not request (e.g. hls, dash)
    pub skip_streams: Vec<String>,
    /// Skip TLS certificate validation
    pub insecure_tls: bool,
    /// Explicit path to the yt-dlp binary
    pub ytdlp_path: Option<String>,
    /// Explicit Python interpreter
    pub python_cmd: Option<String>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            mode: ExtractorMode::Auto,
            proxy: None,
            cookies_path: None,
            timeout_seconds: 30,
            player_client: None,
            user_agent: None,
            geo_bypass: true,
            skip_streams: Vec::new(),
            insecure_tls: false,
            ytdlp_path: None,
            python_cmd: None,
        }
    }
}

impl ExtractorConfig {
    pub fn with_cookies_path(mut self, path: Option<String>) -> Self {
        self.cookies_path = path;
        self
    }

    pub fn with_mode(mut self, mode: ExtractorMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_player_client(mut self, client: Option<String>) -> Self {
        self.player_client = client;
        self
    }

    pub fn with_skip_streams(mut self, streams: Vec<String>) -> Self {
        self.skip_streams = streams;
        self
    }

    pub fn with_insecure_tls(mut self, enabled: bool) -> Self {
        self.insecure_tls = enabled;
        self
    }

    /// yt-dlp arguments shared by every runner
    pub fn build_args(&self, url: &str, client: Option<&str>, scope: ExtractScope) -> Vec<String> {
        let mut args = vec![
            "--dump-json".to_string(),
            "--no-playlist".to_string(),
            "--no-warnings".to_string(),
            "--socket-timeout".to_string(),
            self.timeout_seconds.to_string(),
            "--retries".to_string(),
            "2".to_string(),
        ];

        if scope == ExtractScope::Basic {
            args.push("--ignore-no-formats-error".to_string());
        }

        if let Some(agent) = &self.user_agent {
            args.push("--user-agent".to_string());
            args.push(agent.clone());
        }

        if self.geo_bypass {
            args.push("--geo-bypass".to_string());
        }

        if self.insecure_tls {
            args.push("--no-check-certificates".to_string());
        }

        // YouTube-specific extractor arguments
        if is_youtube_url(url) {
            let mut parts = Vec::new();
            if let Some(client) = client {
                parts.push(format!("player_client={}", client));
            }
            if !self.skip_streams.is_empty() {
                parts.push(format!("skip={}", self.skip_streams.join(",")));
            }
            if !parts.is_empty() {
                args.push("--extractor-args".to_string());
                args.push(format!("youtube:{}", parts.join(";")));
            }
        }

        if let Some(path) = &self.cookies_path {
            args.push("--cookies".to_string());
            args.push(path.clone());
        }

        if let Some(proxy) = &self.proxy {
            args.push("--proxy".to_string());
            args.push(proxy.clone());
        }

        args.push(url.to_string());
        args
    }
}

pub fn is_youtube_url(url: &str) -> bool {
    let lower = url.to_lowercase();
    lower.contains("youtube.com") || lower.contains("youtu.be")
}

/// A concrete yt-dlp runner
#[async_trait]
pub trait InfoExtractor: Send + Sync {
    /// Name of the extractor (for logging)
    fn name(&self) -> &'static str;

    /// Check if this extractor is available
    async fn is_available(&self) -> bool;

    /// Extract the raw record for one URL
    async fn extract(
        &self,
        url: &str,
        config: &ExtractorConfig,
        scope: ExtractScope,
    ) -> Result<RawVideoInfo, ExtractError>;
}

/// Primary source of video metadata
#[async_trait]
pub trait MetadataSource: Send + Sync {
    /// Full record including every format descriptor
    async fn fetch(&self, url: &str) -> Result<RawVideoInfo, ExtractError>;

    /// Lighter fetch; the format list may be empty
    async fn fetch_basic(&self, url: &str) -> Result<RawVideoInfo, ExtractError> {
        self.fetch(url).await
    }
}

/// Secondary source consulted when the primary one fails
#[async_trait]
pub trait FallbackSource: Send + Sync {
    /// Name of the source (for logging)
    fn name(&self) -> &'static str;

    /// Minimal synthesized record for a video identifier
    async fn fetch(&self, video_id: &str) -> Result<RawVideoInfo, ExtractError>;
}
