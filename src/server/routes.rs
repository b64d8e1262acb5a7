//! Route wiring and request handlers

use crate::resolver::models::StreamPayload;
use crate::server::error::ApiError;
use crate::server::formats::VideoDetails;
use crate::server::state::AppState;
use crate::utils::error::VidgateError;
use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::{header, HeaderValue};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use mime_guess::MimeGuess;
use serde::Deserialize;
use tracing::debug;

/// Fixed document served on the root path
const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// Builds the application router around the injected state
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/get_video_info", post(get_video_info))
        .route("/download", get(download))
        .with_state(state)
}

async fn index() -> Response {
    // Content type follows the asset's file extension, the same way a
    // static file server would infer it.
    let mime = MimeGuess::from_path("index.html").first_or_text_plain();
    ([(header::CONTENT_TYPE, mime.to_string())], INDEX_HTML).into_response()
}

#[derive(Debug, Deserialize)]
struct InfoRequest {
    url: String,
}

async fn get_video_info(
    State(state): State<AppState>,
    Json(request): Json<InfoRequest>,
) -> Result<Json<VideoDetails>, ApiError> {
    debug!("Resolving formats for {}", request.url);
    let video = state
        .resolver
        .resolve(&request.url)
        .await
        .map_err(ApiError::json)?;
    Ok(Json(VideoDetails::from_video(&video)))
}

#[derive(Debug, Deserialize)]
struct DownloadQuery {
    url: String,
    itag: String,
}

async fn download(
    State(state): State<AppState>,
    Query(query): Query<DownloadQuery>,
) -> Result<Response, ApiError> {
    let itag: u32 = query
        .itag
        .trim()
        .parse()
        .map_err(|_| ApiError::text(VidgateError::InvalidItag(query.itag.clone())))?;

    debug!("Proxying stream {} for {}", itag, query.url);
    let payload = state
        .resolver
        .fetch(&query.url, itag)
        .await
        .map_err(ApiError::text)?;

    attachment_response(payload).map_err(ApiError::text)
}

/// Wraps the fetched stream in an attachment download response. The title
/// goes into the filename as-is; a title that cannot be carried in a
/// header is rejected rather than rewritten.
fn attachment_response(payload: StreamPayload) -> Result<Response, VidgateError> {
    let filename = format!("{}.{}", payload.title, payload.container);
    let disposition = format!("attachment; filename=\"{filename}\"");

    let mut response = Body::from_stream(payload.content).into_response();
    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_str(&payload.mime_type)?,
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&disposition)?,
    );
    if let Some(length) = payload.content_length {
        headers.insert(header::CONTENT_LENGTH, HeaderValue::from(length));
    }

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::models::ResolvedVideo;
    use crate::resolver::traits::StreamResolver;
    use async_trait::async_trait;
    use axum::body::to_bytes;
    use axum::http::StatusCode;
    use bytes::Bytes;
    use futures::StreamExt;
    use std::sync::Arc;

    struct RefusingResolver;

    #[async_trait]
    impl StreamResolver for RefusingResolver {
        fn id(&self) -> &'static str {
            "refusing"
        }

        async fn resolve(&self, url: &str) -> Result<ResolvedVideo, VidgateError> {
            Err(VidgateError::Extraction(format!("cannot resolve {url}")))
        }

        async fn fetch(&self, _url: &str, itag: u32) -> Result<StreamPayload, VidgateError> {
            Err(VidgateError::StreamNotFound(itag))
        }
    }

    fn refusing_state() -> AppState {
        AppState::new(Arc::new(RefusingResolver))
    }

    #[tokio::test]
    async fn index_serves_html() {
        let response = index().await;
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(content_type.starts_with("text/html"));

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(!body.is_empty());
    }

    #[tokio::test]
    async fn download_rejects_non_numeric_itag() {
        let query = DownloadQuery {
            url: "https://example.com/watch?v=abc".to_string(),
            itag: "best".to_string(),
        };
        let err = download(State(refusing_state()), Query(query))
            .await
            .unwrap_err();

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(body.as_ref(), b"Invalid itag: best");
    }

    #[tokio::test]
    async fn attachment_headers_are_derived_from_payload() {
        let payload = StreamPayload {
            title: "Sample Video".to_string(),
            mime_type: "video/mp4".to_string(),
            container: "mp4".to_string(),
            content_length: Some(4),
            content: futures::stream::iter(vec![Ok(Bytes::from_static(b"demo"))]).boxed(),
        };

        let response = attachment_response(payload).unwrap();
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "video/mp4"
        );
        assert_eq!(
            response.headers().get(header::CONTENT_DISPOSITION).unwrap(),
            "attachment; filename=\"Sample Video.mp4\""
        );
        assert_eq!(response.headers().get(header::CONTENT_LENGTH).unwrap(), "4");

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(body.as_ref(), b"demo");
    }

    #[tokio::test]
    async fn resolver_failure_maps_to_json_error() {
        let request = InfoRequest {
            url: "https://example.com/watch?v=abc".to_string(),
        };
        let err = get_video_info(State(refusing_state()), Json(request))
            .await
            .unwrap_err();

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(parsed["error"].as_str().unwrap().contains("cannot resolve"));
    }
}
