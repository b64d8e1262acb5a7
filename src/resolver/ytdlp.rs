//! yt-dlp backed resolver
//!
//! All platform negotiation is delegated to the yt-dlp executable; this
//! module runs it, maps its JSON format table into `StreamVariant`s, and
//! fetches a chosen stream's bytes from the direct media URL it reports.

use crate::resolver::models::{ResolvedVideo, StreamKind, StreamPayload, StreamVariant};
use crate::resolver::traits::StreamResolver;
use crate::utils::error::VidgateError;
use async_trait::async_trait;
use futures::{StreamExt, TryStreamExt};
use serde::Deserialize;
use std::io;
use std::path::PathBuf;
use tokio::process::Command as AsyncCommand;
use tracing::{debug, error, info, warn};

/// Stream resolver backed by the yt-dlp executable
pub struct YtDlpResolver {
    ytdlp_path: PathBuf,
    http: reqwest::Client,
}

impl YtDlpResolver {
    /// Initialize the resolver and verify yt-dlp availability
    ///
    /// Search order:
    /// 1. System PATH
    /// 2. Common installation paths
    pub fn new() -> Result<Self, VidgateError> {
        let ytdlp_path = match find_ytdlp() {
            Some(path) => {
                info!("Found yt-dlp at: {}", path.display());
                path
            }
            None => {
                error!("yt-dlp not found anywhere!");
                return Err(VidgateError::YtDlpNotFound);
            }
        };

        Ok(Self {
            ytdlp_path,
            http: reqwest::Client::new(),
        })
    }

    /// Dump video metadata without downloading
    /// Uses: yt-dlp --dump-json --no-download
    async fn dump_json(&self, url: &str) -> Result<RawVideoInfo, VidgateError> {
        let output = AsyncCommand::new(&self.ytdlp_path)
            .arg("--dump-json")
            .arg("--no-download")
            .arg("--no-warnings")
            .arg(url)
            .output()
            .await?;

        if !output.status.success() {
            let error_msg = String::from_utf8_lossy(&output.stderr);
            error!("yt-dlp resolution failed: {}", error_msg);
            return Err(VidgateError::Extraction(error_msg.trim().to_string()));
        }

        Ok(serde_json::from_slice(&output.stdout)?)
    }
}

#[async_trait]
impl StreamResolver for YtDlpResolver {
    fn id(&self) -> &'static str {
        "yt-dlp"
    }

    async fn resolve(&self, url: &str) -> Result<ResolvedVideo, VidgateError> {
        debug!("Resolving video info for URL: {}", url);
        let raw = self.dump_json(url).await?;
        Ok(map_video(raw))
    }

    async fn fetch(&self, url: &str, itag: u32) -> Result<StreamPayload, VidgateError> {
        debug!("Fetching stream {} from {}", itag, url);
        let video = self.resolve(url).await?;
        let stream = video
            .stream(itag)
            .ok_or(VidgateError::StreamNotFound(itag))?;

        let response = self.http.get(&stream.source_url).send().await?;
        if !response.status().is_success() {
            error!("Media URL answered HTTP {}", response.status());
            return Err(VidgateError::Download(format!(
                "media URL answered HTTP {}",
                response.status()
            )));
        }

        let content_length = response.content_length().or(stream.file_size);
        let content = response
            .bytes_stream()
            .map_err(|err| io::Error::new(io::ErrorKind::Other, err))
            .boxed();

        Ok(StreamPayload {
            title: video.title.clone(),
            mime_type: stream.mime_type.clone(),
            container: stream.container.clone(),
            content_length,
            content,
        })
    }
}

// ============================================================
// yt-dlp JSON mapping
// ============================================================

/// Subset of the yt-dlp JSON dump the resolver reads
#[derive(Debug, Deserialize)]
struct RawVideoInfo {
    title: String,
    thumbnail: Option<String>,
    #[serde(default)]
    formats: Vec<RawFormat>,
}

#[derive(Debug, Deserialize)]
struct RawFormat {
    format_id: String,
    ext: String,
    url: Option<String>,
    vcodec: Option<String>,
    acodec: Option<String>,
    height: Option<u32>,
    abr: Option<f64>,
    filesize: Option<u64>,
    filesize_approx: Option<f64>,
}

fn map_video(raw: RawVideoInfo) -> ResolvedVideo {
    let streams = raw.formats.into_iter().filter_map(map_format).collect();
    ResolvedVideo {
        title: raw.title,
        thumbnail_url: raw.thumbnail.unwrap_or_default(),
        streams,
    }
}

/// Maps one yt-dlp format row. Rows without a numeric id or a media URL
/// (storyboards, merged selectors) are dropped so every advertised itag
/// can be fetched later.
fn map_format(raw: RawFormat) -> Option<StreamVariant> {
    let itag: u32 = raw.format_id.parse().ok()?;
    let source_url = raw.url?;

    let has_video = codec_present(&raw.vcodec);
    let has_audio = codec_present(&raw.acodec);
    let kind = match (has_video, has_audio) {
        (true, true) => StreamKind::Progressive,
        (true, false) => StreamKind::VideoOnly,
        (false, true) => StreamKind::AudioOnly,
        (false, false) => return None,
    };

    let file_size = raw
        .filesize
        .or_else(|| raw.filesize_approx.map(|approx| approx as u64));

    Some(StreamVariant {
        itag,
        kind,
        mime_type: mime_for(kind, &raw.ext),
        container: raw.ext,
        resolution: raw.height.map(|h| format!("{h}p")),
        audio_bitrate_kbps: raw.abr.map(|abr| abr.round() as u32),
        file_size,
        source_url,
    })
}

fn codec_present(codec: &Option<String>) -> bool {
    codec.as_deref().is_some_and(|c| c != "none")
}

/// MIME type in the `<type>/<subtype>` shape the platform reports; m4a
/// audio is carried in an mp4 container.
fn mime_for(kind: StreamKind, ext: &str) -> String {
    let top = if kind == StreamKind::AudioOnly {
        "audio"
    } else {
        "video"
    };
    let subtype = if ext == "m4a" { "mp4" } else { ext };
    format!("{top}/{subtype}")
}

// ============================================================
// yt-dlp Detection
// ============================================================

/// Find the yt-dlp binary: system PATH first, then common install paths
pub fn find_ytdlp() -> Option<PathBuf> {
    if let Ok(path) = which::which("yt-dlp") {
        return Some(path);
    }

    let common_paths = [
        "/usr/local/bin/yt-dlp",
        "/usr/bin/yt-dlp",
        "/opt/homebrew/bin/yt-dlp",
    ];
    for path_str in common_paths {
        let path = PathBuf::from(path_str);
        if path.exists() {
            return Some(path);
        }
    }

    warn!("yt-dlp not found in PATH or common locations");
    None
}
