//! Transport-level error mapping
//!
//! Resolver errors stay typed until they reach this boundary. Both
//! endpoints answer 400 with the error's display text; the metadata
//! endpoint encodes it as `{"error": ...}` JSON while the download
//! endpoint answers plain text.

use crate::utils::error::VidgateError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// How the error body is encoded on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ErrorEncoding {
    Json,
    Text,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    encoding: ErrorEncoding,
    message: String,
}

impl ApiError {
    /// 400 with a `{"error": message}` JSON body (metadata endpoint)
    pub fn json(err: VidgateError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            encoding: ErrorEncoding::Json,
            message: err.to_string(),
        }
    }

    /// 400 with the raw message as plain text (download endpoint)
    pub fn text(err: VidgateError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            encoding: ErrorEncoding::Text,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.encoding {
            ErrorEncoding::Json => {
                let body = serde_json::json!({ "error": self.message });
                (self.status, Json(body)).into_response()
            }
            ErrorEncoding::Text => (self.status, self.message).into_response(),
        }
    }
}
