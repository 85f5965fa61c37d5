// Service configuration
//
// Defaults, then an optional TOML file, then environment overrides.

use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::extractor::{ExtractorConfig, ExtractorMode, DEFAULT_OEMBED_ENDPOINT};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid value for {key}: {value}")]
    InvalidEnv { key: &'static str, value: String },
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub extractor: ExtractorConfig,
    pub fallback: FallbackConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.host.parse().map_err(|_| ConfigError::InvalidEnv {
            key: "HOST",
            value: self.host.clone(),
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FallbackConfig {
    pub enabled: bool,
    pub endpoint: String,
    pub timeout_seconds: u64,
    pub insecure_tls: bool,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: DEFAULT_OEMBED_ENDPOINT.to_string(),
            timeout_seconds: 10,
            insecure_tls: false,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub filters: Option<String>,
}

impl LoggingConfig {
    /// Filter directive string, `RUST_LOG` aside
    pub fn directives(&self) -> String {
        let level = self.level.as_deref().unwrap_or("info");
        match self.filters.as_deref() {
            Some(filters) if !filters.is_empty() => format!("{},{}", level, filters),
            _ => level.to_string(),
        }
    }
}

impl AppConfig {
    /// Load from the first config file found, then apply the process environment
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match Self::find_config_file() {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    fn find_config_file() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("VIDEO_INFO_CONFIG") {
            return Some(PathBuf::from(path));
        }

        let local = PathBuf::from("config.toml");
        if local.exists() {
            return Some(local);
        }

        dirs::config_dir()
            .map(|dir| dir.join("video-info-api").join("config.toml"))
            .filter(|path| path.exists())
    }

    /// Apply overrides from an environment lookup
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = parse_env("PORT", &port)?;
        }
        if let Some(path) = lookup("YTDLP_PATH") {
            self.extractor.ytdlp_path = Some(path);
        }
        if let Some(python) = lookup("YTDLP_PYTHON") {
            self.extractor.python_cmd = Some(python);
        }
        if let Some(mode) = lookup("EXTRACTOR_MODE") {
            self.extractor.mode = mode
                .parse::<ExtractorMode>()
                .map_err(|_| ConfigError::InvalidEnv { key: "EXTRACTOR_MODE", value: mode })?;
        }
        if let Some(proxy) = lookup("EXTRACTOR_PROXY") {
            self.extractor.proxy = Some(proxy).filter(|p| !p.is_empty());
        }
        if let Some(timeout) = lookup("EXTRACTOR_TIMEOUT") {
            self.extractor.timeout_seconds = parse_env("EXTRACTOR_TIMEOUT", &timeout)?;
        }
        if let Some(insecure) = lookup("EXTRACTOR_INSECURE_TLS") {
            self.extractor.insecure_tls = parse_bool("EXTRACTOR_INSECURE_TLS", &insecure)?;
        }
        if let Some(enabled) = lookup("FALLBACK_ENABLED") {
            self.fallback.enabled = parse_bool("FALLBACK_ENABLED", &enabled)?;
        }
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
        key,
        value: value.to_string(),
    })
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidEnv {
            key,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_are_safe() {
        let config = AppConfig::default();

        assert_eq!(config.server.port, 5000);
        assert_eq!(config.extractor.mode, ExtractorMode::Auto);
        assert!(!config.extractor.insecure_tls);
        assert!(!config.fallback.insecure_tls);
        assert!(config.fallback.enabled);
        assert_eq!(config.logging.directives(), "info");
    }

    #[test]
    fn parses_partial_toml() {
        let config = AppConfig::from_toml(
            r#"
            [server]
            port = 8080

            [extractor]
            mode = "cli"
            skip_streams = ["hls", "dash"]

            [logging]
            level = "debug"
            filters = "hyper=warn"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.extractor.mode, ExtractorMode::Cli);
        assert_eq!(config.extractor.skip_streams, ["hls", "dash"]);
        assert_eq!(config.extractor.timeout_seconds, 30);
        assert_eq!(config.logging.directives(), "debug,hyper=warn");
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(AppConfig::from_toml("[server]\nport = \"many\"").is_err());
    }

    #[test]
    fn env_overrides_file_values() {
        let mut config = AppConfig::default();
        config
            .apply_env(env(&[
                ("PORT", "9000"),
                ("EXTRACTOR_MODE", "python"),
                ("EXTRACTOR_INSECURE_TLS", "true"),
                ("FALLBACK_ENABLED", "0"),
            ]))
            .unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.extractor.mode, ExtractorMode::Python);
        assert!(config.extractor.insecure_tls);
        assert!(!config.fallback.enabled);
    }

    #[test]
    fn bad_env_values_are_errors() {
        let mut config = AppConfig::default();
        let err = config.apply_env(env(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { key: "PORT", .. }));
    }

    #[test]
    fn builds_socket_addr() {
        let addr = ServerConfig::default().socket_addr().unwrap();
        assert_eq!(addr.to_string(), "0.0.0.0:5000");
    }
}
