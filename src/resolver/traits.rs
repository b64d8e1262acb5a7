use crate::resolver::models::{ResolvedVideo, StreamPayload};
use crate::utils::error::VidgateError;
use async_trait::async_trait;

/// Core trait for stream resolvers
///
/// This trait isolates the HTTP layer from the specific resolution
/// backend (yt-dlp subprocess, test fake, etc.).
#[async_trait]
pub trait StreamResolver: Send + Sync {
    /// Returns a unique identifier for this resolver (e.g., "yt-dlp")
    fn id(&self) -> &'static str;

    /// Resolves a video URL to its title, thumbnail and stream list
    async fn resolve(&self, url: &str) -> Result<ResolvedVideo, VidgateError>;

    /// Re-resolves the URL and opens the byte content of the stream
    /// matching `itag`
    async fn fetch(&self, url: &str, itag: u32) -> Result<StreamPayload, VidgateError>;
}
