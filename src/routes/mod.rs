// routes/mod.rs
// Route handlers and the router that wires them together.

use std::sync::Arc;

use axum::{Router, middleware, routing::get};
use tower_http::trace::TraceLayer;

use crate::{admin::require_admin, state::AppState};

pub mod documents;
pub mod download;
pub mod roles;
pub mod uploads;

pub use documents::{documents_index, documents_summary};
pub use download::force_download;
pub use roles::admin_check;
pub use uploads::filename_preview;

pub async fn health() -> &'static str {
    "ok"
}

pub fn router(state: Arc<AppState>) -> Router {
    let admin_only = Router::new()
        .route("/api/documents", get(documents_index))
        .route("/api/documents/summary", get(documents_summary))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    Router::new()
        .route("/health", get(health))
        .route("/force-download", get(force_download))
        .route("/api/admin/{user_id}", get(admin_check))
        .route("/api/filename", get(filename_preview))
        .merge(admin_only)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
