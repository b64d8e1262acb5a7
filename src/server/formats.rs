//! Format catalog assembly
//!
//! Shapes a resolved video into the flat descriptor list the metadata
//! endpoint returns, and renders byte counts for humans.

use crate::resolver::models::{ResolvedVideo, StreamKind, StreamVariant};
use serde::{Deserialize, Serialize};

/// One selectable format as shown to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatDescriptor {
    pub itag: u32,
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    #[serde(rename = "qualityLabel")]
    pub quality_label: String,
    #[serde(rename = "fileSize")]
    pub file_size: String,
}

/// Response body for `POST /get_video_info`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoDetails {
    pub title: String,
    pub thumbnail: String,
    pub formats: Vec<FormatDescriptor>,
}

impl VideoDetails {
    /// Builds the response entity. Formats are assembled in a fixed
    /// order: progressive streams, then adaptive streams, then one
    /// best-audio entry whenever any audio-only stream exists. The final
    /// entry usually repeats an adaptive row; clients select by itag, so
    /// the listing is not deduplicated.
    pub fn from_video(video: &ResolvedVideo) -> Self {
        let mut formats = Vec::new();

        for stream in &video.streams {
            if stream.kind == StreamKind::Progressive {
                formats.push(descriptor(stream, resolution_label(stream)));
            }
        }

        for stream in &video.streams {
            let label = match stream.kind {
                StreamKind::Progressive => continue,
                StreamKind::VideoOnly => {
                    format!("{} (video only)", resolution_label(stream))
                }
                StreamKind::AudioOnly => {
                    format!("{} (audio only)", bitrate_label(stream))
                }
            };
            formats.push(descriptor(stream, label));
        }

        if let Some(audio) = video.best_audio() {
            formats.push(descriptor(
                audio,
                format!("Audio Only ({})", bitrate_label(audio)),
            ));
        }

        Self {
            title: video.title.clone(),
            thumbnail: video.thumbnail_url.clone(),
            formats,
        }
    }
}

fn descriptor(stream: &StreamVariant, quality_label: String) -> FormatDescriptor {
    FormatDescriptor {
        itag: stream.itag,
        mime_type: stream.mime_type.clone(),
        quality_label,
        file_size: format_file_size(stream.file_size),
    }
}

fn resolution_label(stream: &StreamVariant) -> String {
    stream
        .resolution
        .clone()
        .unwrap_or_else(|| "unknown".to_string())
}

fn bitrate_label(stream: &StreamVariant) -> String {
    match stream.audio_bitrate_kbps {
        Some(kbps) => format!("{kbps}kbps"),
        None => "unknown".to_string(),
    }
}

/// Renders a byte count with two decimals over B/KB/MB/GB, TB unbounded.
/// Unknown sizes render as "Unknown".
pub fn format_file_size(bytes: Option<u64>) -> String {
    let Some(bytes) = bytes else {
        return "Unknown".to_string();
    };

    let mut value = bytes as f64;
    for unit in ["B", "KB", "MB", "GB"] {
        if value < 1024.0 {
            return format!("{value:.2} {unit}");
        }
        value /= 1024.0;
    }
    format!("{value:.2} TB")
}
