// Normalized video records shared by every response shape

use serde::Serialize;
use serde_json::Number;

use super::duration::format_duration;
use super::format_selector::FormatSelector;
use super::normalizer::normalize_formats;
use crate::extractor::RawVideoInfo;

/// Codec marker yt-dlp uses for "this track is absent"
pub const NO_CODEC: &str = "none";

/// Fixed-shape format record; `None` serializes as `null` (unknown)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedFormat {
    pub format_id: Option<String>,
    pub ext: Option<String>,
    pub resolution: String,
    pub height: Option<u64>,
    pub width: Option<u64>,
    pub filesize: Option<u64>,
    pub filesize_mb: Option<f64>,
    pub url: Option<String>,
    pub format_note: String,
    pub acodec: Option<String>,
    pub vcodec: Option<String>,
    /// Audio bitrate in kbps
    pub abr: Option<Number>,
    /// Video bitrate in kbps
    pub vbr: Option<Number>,
    pub fps: Option<Number>,
    /// Total bitrate in kbps
    pub tbr: Option<Number>,
}

fn is_no_codec(codec: &Option<String>) -> bool {
    codec.as_deref() == Some(NO_CODEC)
}

impl NormalizedFormat {
    /// Video track, no audio track, and a usable height.
    /// An unknown video codec counts as present.
    pub fn is_video_only(&self) -> bool {
        !is_no_codec(&self.vcodec) && is_no_codec(&self.acodec) && self.height.is_some_and(|h| h > 0)
    }

    /// Audio track and no video track. An unknown audio codec counts as present.
    pub fn is_audio_only(&self) -> bool {
        !is_no_codec(&self.acodec) && is_no_codec(&self.vcodec)
    }

    /// Audio bitrate for ranking
    pub fn abr_kbps(&self) -> Option<f64> {
        self.abr.as_ref().and_then(Number::as_f64)
    }
}

/// Best video-only and audio-only picks; either may be absent
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BestFormats {
    pub video: Option<NormalizedFormat>,
    pub audio: Option<NormalizedFormat>,
}

/// Scalar metadata shown by the full and basic shapes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoDetails {
    pub title: String,
    pub description: String,
    pub duration: u64,
    pub duration_formatted: String,
    pub uploader: String,
    pub upload_date: String,
    pub view_count: u64,
    pub like_count: u64,
    pub thumbnail: String,
}

impl VideoDetails {
    pub fn from_raw(raw: &RawVideoInfo) -> Self {
        let duration = raw.duration.unwrap_or(0);

        Self {
            title: raw.title.clone().unwrap_or_else(|| "Unknown".to_string()),
            description: raw.description.clone().unwrap_or_default(),
            duration,
            duration_formatted: format_duration(duration),
            uploader: raw.uploader.clone().unwrap_or_else(|| "Unknown".to_string()),
            upload_date: raw.upload_date.clone().unwrap_or_default(),
            view_count: raw.view_count.unwrap_or(0),
            like_count: raw.like_count.unwrap_or(0),
            thumbnail: raw.thumbnail.clone().unwrap_or_default(),
        }
    }
}

/// Everything known about one video for the lifetime of one request
#[derive(Debug, Clone, PartialEq)]
pub struct VideoRecord {
    pub details: VideoDetails,
    pub formats: Vec<NormalizedFormat>,
    pub best_formats: BestFormats,
}

impl VideoRecord {
    pub fn from_raw(raw: &RawVideoInfo) -> Self {
        let formats = normalize_formats(&raw.formats);
        let best_formats = FormatSelector::select_best(&formats);

        Self {
            details: VideoDetails::from_raw(raw),
            formats,
            best_formats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::RawFormat;
    use serde_json::json;

    #[test]
    fn details_fall_back_to_defaults() {
        let details = VideoDetails::from_raw(&RawVideoInfo::default());

        assert_eq!(details.title, "Unknown");
        assert_eq!(details.uploader, "Unknown");
        assert_eq!(details.description, "");
        assert_eq!(details.duration, 0);
        assert_eq!(details.duration_formatted, "0:00");
        assert_eq!(details.view_count, 0);
        assert_eq!(details.thumbnail, "");
    }

    #[test]
    fn record_normalizes_and_selects() {
        let raw = RawVideoInfo {
            title: Some("Clip".to_string()),
            duration: Some(185),
            formats: vec![
                RawFormat::new(json!({"format_id": "137", "height": 1080, "vcodec": "avc1", "acodec": "none"})),
                RawFormat::new(json!({"format_id": "140", "abr": 129.5, "vcodec": "none", "acodec": "mp4a.40.2"})),
                RawFormat::new(json!({"format_id": "18", "height": 360, "vcodec": "avc1", "acodec": "mp4a.40.2"})),
            ],
            ..RawVideoInfo::default()
        };

        let record = VideoRecord::from_raw(&raw);

        assert_eq!(record.details.duration_formatted, "3:05");
        assert_eq!(record.formats.len(), 3);
        let video = record.best_formats.video.unwrap();
        let audio = record.best_formats.audio.unwrap();
        assert_eq!(video.format_id.as_deref(), Some("137"));
        assert_eq!(audio.format_id.as_deref(), Some("140"));
    }

    #[test]
    fn muxed_format_is_in_neither_pool() {
        let raw = RawVideoInfo {
            formats: vec![RawFormat::new(json!({"height": 720, "vcodec": "avc1", "acodec": "aac"}))],
            ..RawVideoInfo::default()
        };

        let record = VideoRecord::from_raw(&raw);

        assert_eq!(record.formats.len(), 1);
        assert_eq!(record.best_formats, BestFormats::default());
    }

    #[test]
    fn unknown_codecs_count_as_present() {
        let mut format = normalize_one(json!({"height": 480, "acodec": "none"}));
        assert!(format.is_video_only());

        format = normalize_one(json!({"vcodec": "none"}));
        assert!(format.is_audio_only());
    }

    #[test]
    fn zero_height_is_not_a_video_candidate() {
        let format = normalize_one(json!({"height": 0, "vcodec": "vp9", "acodec": "none"}));
        assert!(!format.is_video_only());
        assert_eq!(format.height, Some(0));
    }

    fn normalize_one(value: serde_json::Value) -> NormalizedFormat {
        crate::video::normalizer::normalize_format(&RawFormat::new(value))
    }
}
