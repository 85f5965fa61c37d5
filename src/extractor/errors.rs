// Error types for metadata sources

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ExtractError {
    /// Network timeout while talking to the video site
    #[error("Network timeout: the video site is not responding")]
    NetworkTimeout,

    /// The site blocked the request (429, bot detection, etc.)
    #[error("Request blocked by the video site")]
    Blocked,

    /// yt-dlp or python not found in system
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// Invalid or unsupported URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse yt-dlp or oEmbed JSON output
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Command execution failed
    #[error("Execution error: {0}")]
    ExecutionError(String),

    /// The source answered but produced no record
    #[error("No metadata returned: {0}")]
    Unavailable(String),

    /// Transport-level HTTP failure
    #[error("HTTP error: {0}")]
    Http(String),

    /// Non-success HTTP status
    #[error("Unexpected HTTP status {0}")]
    HttpStatus(u16),

    /// Unknown error with details
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<reqwest::Error> for ExtractError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::NetworkTimeout
        } else if let Some(status) = e.status() {
            Self::HttpStatus(status.as_u16())
        } else if e.is_decode() {
            Self::ParseError(e.to_string())
        } else {
            Self::Http(e.to_string())
        }
    }
}

// Classifies raw tool stderr text
impl From<String> for ExtractError {
    fn from(s: String) -> Self {
        let lower = s.to_lowercase();

        if lower.contains("timeout") || lower.contains("timed out") {
            return Self::NetworkTimeout;
        }

        if lower.contains("429") || lower.contains("not a bot") || lower.contains("blocked") {
            return Self::Blocked;
        }

        if lower.contains("command not found") || lower.contains("no such file") {
            return Self::ToolNotFound(s);
        }

        if lower.contains("video unavailable")
            || lower.contains("private video")
            || lower.contains("has been removed")
        {
            return Self::Unavailable(s);
        }

        if lower.contains("invalid json") || lower.contains("failed to parse") {
            return Self::ParseError(s);
        }

        if lower.contains("unsupported url") || lower.contains("invalid url") {
            return Self::InvalidUrl(s);
        }

        Self::Unknown(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_timeouts() {
        let err = ExtractError::from("ERROR: Read timed out.".to_string());
        assert!(matches!(err, ExtractError::NetworkTimeout));
    }

    #[test]
    fn classifies_bot_checks() {
        let err = ExtractError::from("Sign in to confirm you're not a bot".to_string());
        assert!(matches!(err, ExtractError::Blocked));
    }

    #[test]
    fn classifies_missing_videos() {
        let err = ExtractError::from("ERROR: [youtube] abc: Video unavailable".to_string());
        assert!(matches!(err, ExtractError::Unavailable(_)));
    }

    #[test]
    fn falls_back_to_unknown() {
        let err = ExtractError::from("something odd happened".to_string());
        assert!(matches!(err, ExtractError::Unknown(msg) if msg == "something odd happened"));
    }
}
