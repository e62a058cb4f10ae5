// routes/download.rs
// GET /force-download?url=...&filename=... -> relays a remote file as an attachment.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Query, State},
    http::{
        HeaderValue,
        header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    },
    response::Response,
};
use serde::Deserialize;

use crate::{
    error::{AppError, Result},
    state::AppState,
};

pub const DEFAULT_FILENAME: &str = "archivo";

#[derive(Deserialize)]
pub struct DownloadQuery {
    pub url: Option<String>,
    pub filename: Option<String>,
}

/// Streams the upstream body straight through; nothing is buffered server-side.
pub async fn force_download(
    State(state): State<Arc<AppState>>,
    Query(q): Query<DownloadQuery>,
) -> Result<Response> {
    let url = q
        .url
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .ok_or_else(|| AppError::BadRequest("URL requerida".to_string()))?;
    let filename = q
        .filename
        .filter(|f| !f.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FILENAME.to_string());

    let upstream = state.http.get(url).send().await?.error_for_status()?;

    let content_type = upstream
        .headers()
        .get(CONTENT_TYPE)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static("application/octet-stream"));

    tracing::info!(url, filename = %filename, "forwarding download");

    let mut response = Response::new(Body::from_stream(upstream.bytes_stream()));
    let headers = response.headers_mut();
    headers.insert(CONTENT_TYPE, content_type);
    headers.insert(CONTENT_DISPOSITION, content_disposition(&filename));
    Ok(response)
}

/// `attachment; filename="<name>"` with characters that would break the quoted value removed.
pub fn content_disposition(filename: &str) -> HeaderValue {
    let cleaned: String = filename
        .chars()
        .filter(|c| !c.is_control() && !matches!(c, '"' | '\\'))
        .collect();
    HeaderValue::from_bytes(format!("attachment; filename=\"{cleaned}\"").as_bytes())
        .unwrap_or_else(|_| HeaderValue::from_static("attachment; filename=\"archivo\""))
}
