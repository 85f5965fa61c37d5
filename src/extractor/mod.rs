// Metadata sources
//
// Primary source: yt-dlp, in two flavours:
// - Python mode: `python3 -m yt_dlp` (better for YouTube, avoids bot detection)
// - CLI mode: native `yt-dlp` binary (faster, no Python dependency)
//
// The orchestrator picks between them and falls back on failure.
// Secondary source: the public oEmbed endpoint, used when yt-dlp fails.

pub mod cli;
pub mod diagnostics;
pub mod errors;
pub mod models;
pub mod oembed;
pub mod orchestrator;
pub mod process;
pub mod python;
pub mod traits;

pub use cli::CliInfoExtractor;
pub use diagnostics::{diagnose_error, BlockingReason};
pub use errors::ExtractError;
pub use models::{RawFormat, RawVideoInfo};
pub use oembed::{watch_url, OEmbedClient, DEFAULT_OEMBED_ENDPOINT};
pub use orchestrator::{InfoExtractorOrchestrator, OrchestratorStatus};
pub use python::PythonInfoExtractor;
pub use traits::{
    ExtractScope, ExtractorConfig, ExtractorMode, FallbackSource, InfoExtractor, MetadataSource,
};
