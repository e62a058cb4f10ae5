// routes/documents.rs
// Admin-only JSON views over classified documents.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
};
use chrono::Local;
use serde::Deserialize;

use crate::{
    admin::AdminUser,
    error::Result,
    expiration::{BucketCounts, DocumentFilters, DocumentView, classify},
    state::AppState,
};

/// Bucket toggles as query parameters. An omitted toggle counts as enabled.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DocumentsQuery {
    pub vencidos: Option<bool>,
    pub con_fecha: Option<bool>,
    pub sin_fecha: Option<bool>,
    pub company_id: Option<String>,
}

impl DocumentsQuery {
    fn filters(&self) -> DocumentFilters {
        DocumentFilters {
            vencidos: self.vencidos.unwrap_or(true),
            con_fecha: self.con_fecha.unwrap_or(true),
            sin_fecha: self.sin_fecha.unwrap_or(true),
        }
    }
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SummaryQuery {
    pub company_id: Option<String>,
}

pub async fn documents_index(
    admin: AdminUser,
    State(state): State<Arc<AppState>>,
    Query(q): Query<DocumentsQuery>,
) -> Result<Json<Vec<DocumentView>>> {
    let documents = state.store.list_documents(q.company_id.as_deref()).await?;
    let today = Local::now().date_naive();
    let views = classify(&documents, &q.filters(), today);

    tracing::debug!(
        user_id = admin.user_id(),
        total = documents.len(),
        shown = views.len(),
        "listed documents"
    );
    Ok(Json(views))
}

pub async fn documents_summary(
    _admin: AdminUser,
    State(state): State<Arc<AppState>>,
    Query(q): Query<SummaryQuery>,
) -> Result<Json<BucketCounts>> {
    let documents = state.store.list_documents(q.company_id.as_deref()).await?;
    let today = Local::now().date_naive();
    let views = classify(&documents, &DocumentFilters::all(), today);
    Ok(Json(BucketCounts::tally(&views)))
}
