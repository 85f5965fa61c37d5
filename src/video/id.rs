use serde::Serialize;
use std::fmt;

use super::errors::LookupError;
use crate::extractor::watch_url;

/// Canonical video identifiers are exactly this many characters wide
pub const VIDEO_ID_LEN: usize = 11;

/// A video identifier that passed the length gate
///
/// Only the width is checked; the character set is left to the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    pub fn parse(raw: &str) -> Result<Self, LookupError> {
        if raw.chars().count() != VIDEO_ID_LEN {
            return Err(LookupError::InvalidId);
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical watch page URL handed to the metadata source
    pub fn watch_url(&self) -> String {
        watch_url(&self.0)
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_exactly_eleven_characters() {
        let id = VideoId::parse("dQw4w9WgXcQ").unwrap();
        assert_eq!(id.watch_url(), "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
    }

    #[test]
    fn content_is_not_checked() {
        assert!(VideoId::parse("!!!!!!!!!!!").is_ok());
        assert!(VideoId::parse("ééééééééééé").is_ok());
    }

    #[test]
    fn rejects_other_lengths() {
        assert!(matches!(VideoId::parse("short"), Err(LookupError::InvalidId)));
        assert!(matches!(VideoId::parse(""), Err(LookupError::InvalidId)));
        assert!(matches!(VideoId::parse("dQw4w9WgXcQx"), Err(LookupError::InvalidId)));
    }
}
