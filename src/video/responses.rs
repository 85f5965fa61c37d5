// The three success body shapes

use serde::Serialize;

use super::id::VideoId;
use super::models::{BestFormats, NormalizedFormat, VideoDetails, VideoRecord};

/// Identifier, scalar metadata, format list and best picks
#[derive(Debug, Clone, Serialize)]
pub struct FullResponse {
    pub success: bool,
    pub video_id: VideoId,
    #[serde(flatten)]
    pub details: VideoDetails,
    pub formats: Vec<NormalizedFormat>,
    pub best_formats: BestFormats,
}

impl FullResponse {
    pub fn new(video_id: VideoId, record: VideoRecord) -> Self {
        Self {
            success: true,
            video_id,
            details: record.details,
            formats: record.formats,
            best_formats: record.best_formats,
        }
    }
}

/// Identifier, format list and best picks
#[derive(Debug, Clone, Serialize)]
pub struct FormatsResponse {
    pub success: bool,
    pub video_id: VideoId,
    pub formats: Vec<NormalizedFormat>,
    pub best_formats: BestFormats,
}

impl FormatsResponse {
    pub fn new(video_id: VideoId, record: VideoRecord) -> Self {
        Self {
            success: true,
            video_id,
            formats: record.formats,
            best_formats: record.best_formats,
        }
    }
}

/// Identifier and scalar metadata only
#[derive(Debug, Clone, Serialize)]
pub struct BasicResponse {
    pub success: bool,
    pub video_id: VideoId,
    #[serde(flatten)]
    pub details: VideoDetails,
}

impl BasicResponse {
    pub fn new(video_id: VideoId, details: VideoDetails) -> Self {
        Self {
            success: true,
            video_id,
            details,
        }
    }
}
