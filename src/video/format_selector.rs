// FormatSelector - best video-only / audio-only pick
//
// Single left-to-right pass with two running slots. A candidate only
// replaces the held one when its metric is strictly greater, so the
// earliest-seen format wins ties. Source order is never a ranking signal
// beyond that.

use super::models::{BestFormats, NormalizedFormat};

/// Format selector with deterministic tie-breaking
pub struct FormatSelector;

impl FormatSelector {
    /// Highest-resolution video-only and highest-bitrate audio-only formats
    pub fn select_best(formats: &[NormalizedFormat]) -> BestFormats {
        let mut best = BestFormats::default();

        for format in formats {
            if format.is_video_only() && Self::beats(format.height, best.video.as_ref().map(|v| v.height)) {
                best.video = Some(format.clone());
            }

            // Audio without a known bitrate is never ranked
            if format.is_audio_only()
                && format.abr_kbps().is_some()
                && Self::beats(format.abr_kbps(), best.audio.as_ref().map(|a| a.abr_kbps()))
            {
                best.audio = Some(format.clone());
            }
        }

        best
    }

    /// `held` is `None` when the slot is empty, `Some(None)` when the held
    /// format's metric is unknown.
    fn beats<T: PartialOrd>(candidate: Option<T>, held: Option<Option<T>>) -> bool {
        match (candidate, held) {
            (None, _) => false,
            (Some(_), None) | (Some(_), Some(None)) => true,
            (Some(c), Some(Some(h))) => c > h,
        }
    }
}
