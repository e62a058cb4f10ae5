// routes/uploads.rs
// GET /api/filename?name=...[&companyId=...&category=...] -> storage name for an upload.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};

use crate::{
    filename::{sanitize, storage_path},
    state::AppState,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilenameQuery {
    #[serde(default)]
    pub name: String,
    pub company_id: Option<String>,
    pub category: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilenameResponse {
    pub original: String,
    pub sanitized: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,
}

pub async fn filename_preview(
    State(state): State<Arc<AppState>>,
    Query(q): Query<FilenameQuery>,
) -> Json<FilenameResponse> {
    let storage_path = q.company_id.as_deref().map(|company| {
        storage_path(company, q.category.as_deref().unwrap_or_default(), &q.name)
    });
    Json(FilenameResponse {
        sanitized: sanitize(&q.name),
        original: q.name,
        storage_path,
        bucket: state.storage_bucket.clone(),
    })
}
