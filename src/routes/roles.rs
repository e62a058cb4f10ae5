// routes/roles.rs
// GET /api/admin/{user_id} -> { userId, isAdmin }. Always 200; lookup failures read as false.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::state::{AppState, is_admin};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminCheck {
    pub user_id: String,
    pub is_admin: bool,
}

pub async fn admin_check(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Json<AdminCheck> {
    let is_admin = is_admin(state.store.as_ref(), &state.admin_role, &user_id).await;
    Json(AdminCheck { user_id, is_admin })
}
