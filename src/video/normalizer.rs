// Format normalizer: raw descriptor -> fixed-shape record
//
// Total by construction: every field is read independently through the
// lenient accessors on RawFormat, so a missing or mistyped key only ever
// turns that one field into "unknown".

use super::models::NormalizedFormat;
use crate::extractor::RawFormat;

const BYTES_PER_MEGABYTE: f64 = 1024.0 * 1024.0;

/// Size in megabytes rounded to one decimal; unknown for missing or zero sizes
pub fn filesize_megabytes(filesize: Option<u64>) -> Option<f64> {
    filesize
        .filter(|bytes| *bytes > 0)
        .map(|bytes| (bytes as f64 / BYTES_PER_MEGABYTE * 10.0).round() / 10.0)
}

pub fn normalize_format(raw: &RawFormat) -> NormalizedFormat {
    let filesize = raw.u64_field("filesize");

    NormalizedFormat {
        format_id: raw.str_field("format_id"),
        ext: raw.str_field("ext"),
        resolution: raw.str_field("resolution").unwrap_or_else(|| "N/A".to_string()),
        height: raw.u64_field("height"),
        width: raw.u64_field("width"),
        filesize,
        filesize_mb: filesize_megabytes(filesize),
        url: raw.str_field("url"),
        format_note: raw.str_field("format_note").unwrap_or_default(),
        acodec: raw.str_field("acodec"),
        vcodec: raw.str_field("vcodec"),
        abr: raw.number_field("abr"),
        vbr: raw.number_field("vbr"),
        fps: raw.number_field("fps"),
        tbr: raw.number_field("tbr"),
    }
}

/// Normalize in source order
pub fn normalize_formats(raw: &[RawFormat]) -> Vec<NormalizedFormat> {
    raw.iter().map(normalize_format).collect()
}
