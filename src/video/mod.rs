// Video metadata core: validation, normalization, best-format selection
// and assembly of the three response shapes.

pub mod duration;
pub mod errors;
pub mod format_selector;
pub mod id;
pub mod models;
pub mod normalizer;
pub mod responses;
pub mod service;

pub use duration::format_duration;
pub use errors::LookupError;
pub use format_selector::FormatSelector;
pub use id::{VideoId, VIDEO_ID_LEN};
pub use models::{BestFormats, NormalizedFormat, VideoDetails, VideoRecord};
pub use normalizer::{filesize_megabytes, normalize_format, normalize_formats};
pub use responses::{BasicResponse, FormatsResponse, FullResponse};
pub use service::VideoInfoService;
