// Blocking diagnostics - identifies why an extraction failed
//
// Analyzes yt-dlp stderr to determine:
// - Type of blocking (403, rate limit, geo block, etc.)
// - Whether retrying with another runner might help

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    static ref HTTP_STATUS: Regex = Regex::new(r"(?i)HTTP Error (\d{3})").unwrap();
}

/// Reasons why the video site might refuse a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BlockingReason {
    /// HTTP 403 Forbidden - general access denied
    Http403Forbidden,

    /// PO Token (Proof of Origin) required
    PoTokenRequired,

    /// Age-restricted content requiring login
    AgeRestricted,

    /// Geographic restriction
    GeoBlocked,

    /// Network timeout (soft IP block)
    NetworkTimeout,

    /// Rate limiting (429 or similar)
    RateLimited,

    /// Bot detection triggered
    BotDetection,

    /// Private video requiring authorization
    PrivateVideo,

    /// Video deleted or unavailable
    VideoUnavailable,

    /// Generic/unknown failure
    Unknown,
}

impl BlockingReason {
    /// The video itself is gone or locked; no runner will help
    pub fn is_permanent(&self) -> bool {
        matches!(self, Self::VideoUnavailable | Self::PrivateVideo)
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::Http403Forbidden => "Access denied (HTTP 403)",
            Self::PoTokenRequired => "Proof of Origin token required",
            Self::AgeRestricted => "Age-restricted content",
            Self::GeoBlocked => "Geographic restriction",
            Self::NetworkTimeout => "Network timeout (possible IP throttling)",
            Self::RateLimited => "Rate limited by the video site",
            Self::BotDetection => "Bot detection triggered",
            Self::PrivateVideo => "Private video",
            Self::VideoUnavailable => "Video unavailable",
            Self::Unknown => "Unknown blocking reason",
        }
    }
}

/// Analyze error message and return blocking reason
pub fn diagnose_error(error: &str) -> Option<BlockingReason> {
    if error.trim().is_empty() {
        return None;
    }

    let lower = error.to_lowercase();

    if lower.contains("po token") || lower.contains("proof of origin") {
        return Some(BlockingReason::PoTokenRequired);
    }

    if lower.contains("age-restricted") || lower.contains("sign in to confirm your age") {
        return Some(BlockingReason::AgeRestricted);
    }

    if lower.contains("private video") || lower.contains("video is private") {
        return Some(BlockingReason::PrivateVideo);
    }

    if lower.contains("video unavailable")
        || lower.contains("video has been removed")
        || lower.contains("no longer available")
    {
        return Some(BlockingReason::VideoUnavailable);
    }

    if lower.contains("not available in your country") || lower.contains("blocked in your country")
    {
        return Some(BlockingReason::GeoBlocked);
    }

    if let Some(caps) = HTTP_STATUS.captures(error) {
        match &caps[1] {
            "403" => return Some(BlockingReason::Http403Forbidden),
            "429" => return Some(BlockingReason::RateLimited),
            _ => {}
        }
    }

    if lower.contains("too many requests") || lower.contains("rate limit") {
        return Some(BlockingReason::RateLimited);
    }

    if lower.contains("not a bot") || lower.contains("captcha") || lower.contains("unusual traffic")
    {
        return Some(BlockingReason::BotDetection);
    }

    if lower.contains("forbidden") {
        return Some(BlockingReason::Http403Forbidden);
    }

    if lower.contains("timeout") || lower.contains("timed out") || lower.contains("connection refused")
    {
        return Some(BlockingReason::NetworkTimeout);
    }

    Some(BlockingReason::Unknown)
}
