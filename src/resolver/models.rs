//! Data structures shared between the resolver seam and the HTTP layer

use bytes::Bytes;
use futures::stream::BoxStream;
use serde::{Deserialize, Serialize};

/// Byte chunks produced by a resolver fetch
pub type ByteStream = BoxStream<'static, std::io::Result<Bytes>>;

/// How a stream carries media
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StreamKind {
    /// Combined video+audio
    Progressive,
    /// Video track only, meant to be merged client-side
    VideoOnly,
    /// Audio track only
    AudioOnly,
}

/// One encoded stream variant advertised by the platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamVariant {
    pub itag: u32,
    pub kind: StreamKind,
    pub mime_type: String,
    /// Container used as the filename extension (mp4, webm, m4a, ...)
    pub container: String,
    pub resolution: Option<String>,
    pub audio_bitrate_kbps: Option<u32>,
    pub file_size: Option<u64>,
    /// Direct media URL the fetch path downloads from
    pub source_url: String,
}

/// Everything the resolver learned about one video URL
///
/// Stream order is the resolver's native order and is preserved all the
/// way into the format listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedVideo {
    pub title: String,
    pub thumbnail_url: String,
    pub streams: Vec<StreamVariant>,
}

impl ResolvedVideo {
    /// Looks up a stream by its itag
    pub fn stream(&self, itag: u32) -> Option<&StreamVariant> {
        self.streams.iter().find(|s| s.itag == itag)
    }

    /// Audio-only stream with the highest bitrate, if any
    pub fn best_audio(&self) -> Option<&StreamVariant> {
        self.streams
            .iter()
            .filter(|s| s.kind == StreamKind::AudioOnly)
            .max_by_key(|s| s.audio_bitrate_kbps.unwrap_or(0))
    }
}

/// An opened download for one chosen stream
pub struct StreamPayload {
    pub title: String,
    pub mime_type: String,
    pub container: String,
    pub content_length: Option<u64>,
    pub content: ByteStream,
}
