//! Fallback metadata via the public oEmbed endpoint.
//!
//! oEmbed only knows the title, author and thumbnail. Everything else in the
//! synthesized record is defaulted, and the format list holds a single
//! placeholder entry pointing at the watch page.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

use super::errors::ExtractError;
use super::models::{RawFormat, RawVideoInfo};
use super::traits::FallbackSource;

pub const DEFAULT_OEMBED_ENDPOINT: &str = "https://www.youtube.com/oembed";

/// Canonical watch page for a video identifier
pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_id)
}

#[derive(Debug, Deserialize)]
struct OEmbedResponse {
    title: String,
    author_name: String,
    thumbnail_url: String,
}

/// oEmbed-backed fallback source
pub struct OEmbedClient {
    client: reqwest::Client,
    endpoint: String,
}

impl OEmbedClient {
    pub fn new(
        endpoint: impl Into<String>,
        timeout_secs: u64,
        insecure_tls: bool,
    ) -> Result<Self, ExtractError> {
        if insecure_tls {
            tracing::warn!("TLS certificate verification is disabled for the oEmbed fallback");
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .danger_accept_invalid_certs(insecure_tls)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    fn synthesize(video_id: &str, oembed: OEmbedResponse) -> RawVideoInfo {
        let best = RawFormat::new(json!({
            "format_id": "best",
            "ext": "mp4",
            "url": watch_url(video_id),
            "format_note": "best effort",
        }));

        RawVideoInfo {
            id: Some(video_id.to_string()),
            title: Some(oembed.title),
            description: Some(String::new()),
            duration: Some(0),
            uploader: Some(oembed.author_name),
            upload_date: Some(String::new()),
            view_count: Some(0),
            like_count: Some(0),
            thumbnail: Some(oembed.thumbnail_url),
            formats: vec![best],
        }
    }
}

#[async_trait]
impl FallbackSource for OEmbedClient {
    fn name(&self) -> &'static str {
        "oembed"
    }

    async fn fetch(&self, video_id: &str) -> Result<RawVideoInfo, ExtractError> {
        let url = watch_url(video_id);
        tracing::debug!(endpoint = %self.endpoint, %url, "fetching oEmbed metadata");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("url", url.as_str()), ("format", "json")])
            .send()
            .await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(ExtractError::HttpStatus(status.as_u16()));
        }

        let body = response.text().await?;
        let oembed: OEmbedResponse = serde_json::from_str(&body)
            .map_err(|e| ExtractError::ParseError(format!("Invalid oEmbed JSON: {}", e)))?;

        Ok(Self::synthesize(video_id, oembed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> OEmbedClient {
        OEmbedClient::new(format!("{}/oembed", server.uri()), 5, false).unwrap()
    }

    #[tokio::test]
    async fn synthesizes_record_from_oembed() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/oembed"))
            .and(query_param("url", "https://www.youtube.com/watch?v=dQw4w9WgXcQ"))
            .and(query_param("format", "json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "title": "Never Gonna Give You Up",
                "author_name": "Rick Astley",
                "thumbnail_url": "https://i.ytimg.com/vi/dQw4w9WgXcQ/hqdefault.jpg",
                "type": "video"
            })))
            .mount(&mock_server)
            .await;

        let info = client_for(&mock_server).fetch("dQw4w9WgXcQ").await.unwrap();

        assert_eq!(info.title.as_deref(), Some("Never Gonna Give You Up"));
        assert_eq!(info.uploader.as_deref(), Some("Rick Astley"));
        assert_eq!(info.duration, Some(0));
        assert_eq!(info.formats.len(), 1);
        assert_eq!(info.formats[0].str_field("format_id").as_deref(), Some("best"));
        assert_eq!(
            info.formats[0].str_field("url").as_deref(),
            Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
        );
    }

    #[tokio::test]
    async fn non_200_is_an_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/oembed"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server).fetch("xxxxxxxxxxx").await.unwrap_err();
        assert!(matches!(err, ExtractError::HttpStatus(401)));
    }

    #[tokio::test]
    async fn missing_fields_are_a_parse_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/oembed"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "title": "Only a title"
            })))
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server).fetch("xxxxxxxxxxx").await.unwrap_err();
        assert!(matches!(err, ExtractError::ParseError(_)));
    }
}
