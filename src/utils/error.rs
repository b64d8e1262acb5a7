//! Error handling for vidgate

use thiserror::Error;

/// Main error type for vidgate
///
/// Carries the error kind plus the collaborator's own message through the
/// resolver seam; mapping to an HTTP status and body happens only at the
/// transport boundary in `server::error`.
#[derive(Debug, Error)]
pub enum VidgateError {
    #[error("yt-dlp not found. Please install yt-dlp")]
    YtDlpNotFound,

    #[error("Failed to resolve video info: {0}")]
    Extraction(String),

    #[error("Invalid itag: {0}")]
    InvalidItag(String),

    #[error("No stream with itag {0}")]
    StreamNotFound(u32),

    #[error("Download failed: {0}")]
    Download(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid header value: {0}")]
    Header(#[from] axum::http::header::InvalidHeaderValue),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
