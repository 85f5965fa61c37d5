// Response assembler
//
// Received -> Validated -> MetadataFetched -> (Normalized -> Selected)? -> Assembled
// with early exits on an invalid identifier and on an empty metadata fetch.

use std::sync::Arc;

use super::errors::LookupError;
use super::id::VideoId;
use super::models::{VideoDetails, VideoRecord};
use super::responses::{BasicResponse, FormatsResponse, FullResponse};
use crate::extractor::{FallbackSource, MetadataSource, RawVideoInfo};

/// Stateless per-request assembly over a primary and an optional fallback source
#[derive(Clone)]
pub struct VideoInfoService {
    source: Arc<dyn MetadataSource>,
    fallback: Option<Arc<dyn FallbackSource>>,
}

impl VideoInfoService {
    pub fn new(source: Arc<dyn MetadataSource>, fallback: Option<Arc<dyn FallbackSource>>) -> Self {
        Self { source, fallback }
    }

    pub async fn full(&self, raw_id: &str) -> Result<FullResponse, LookupError> {
        let video_id = VideoId::parse(raw_id)?;
        let raw = self.fetch_with_fallback(&video_id).await?;
        Ok(FullResponse::new(video_id, VideoRecord::from_raw(&raw)))
    }

    pub async fn formats(&self, raw_id: &str) -> Result<FormatsResponse, LookupError> {
        let video_id = VideoId::parse(raw_id)?;
        let raw = self.fetch_with_fallback(&video_id).await?;
        Ok(FormatsResponse::new(video_id, VideoRecord::from_raw(&raw)))
    }

    /// Scalar metadata only; no fallback path
    pub async fn basic(&self, raw_id: &str) -> Result<BasicResponse, LookupError> {
        let video_id = VideoId::parse(raw_id)?;

        let raw = self
            .source
            .fetch_basic(&video_id.watch_url())
            .await
            .map_err(|e| {
                tracing::warn!(video_id = %video_id, error = %e, "basic metadata fetch failed");
                LookupError::NotFound
            })?;

        let details = VideoDetails::from_raw(&raw);
        Ok(BasicResponse::new(video_id, details))
    }

    /// One primary attempt, then exactly one fallback attempt
    async fn fetch_with_fallback(&self, video_id: &VideoId) -> Result<RawVideoInfo, LookupError> {
        let primary_err = match self.source.fetch(&video_id.watch_url()).await {
            Ok(raw) => return Ok(raw),
            Err(e) => e,
        };

        let Some(fallback) = &self.fallback else {
            tracing::warn!(video_id = %video_id, error = %primary_err, "metadata source failed, no fallback configured");
            return Err(LookupError::NotFound);
        };

        tracing::info!(
            video_id = %video_id,
            error = %primary_err,
            fallback = fallback.name(),
            "metadata source failed, trying fallback"
        );

        fallback.fetch(video_id.as_str()).await.map_err(|e| {
            tracing::warn!(video_id = %video_id, fallback = fallback.name(), error = %e, "fallback failed");
            LookupError::NotFound
        })
    }
}
