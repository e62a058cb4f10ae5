// admin.rs
// Admin-only route guard and the extractor handlers use to read the caller.

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::{
    error::AppError,
    state::{AppState, is_admin},
};

pub const USER_ID_HEADER: &str = "x-user-id";

#[derive(Clone, Debug)]
pub struct AdminData {
    pub user_id: String,
}

pub async fn require_admin(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user_id = caller_id(request.headers()).ok_or(AppError::Unauthorized)?;

    if !is_admin(state.store.as_ref(), &state.admin_role, &user_id).await {
        tracing::info!(user_id = %user_id, "rejected non-admin caller");
        return Err(AppError::Forbidden);
    }

    request.extensions_mut().insert(AdminData { user_id });
    Ok(next.run(request).await)
}

pub struct AdminUser(pub AdminData);

impl AdminUser {
    pub fn user_id(&self) -> &str {
        &self.0.user_id
    }
}

impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AdminData>()
            .cloned()
            .map(AdminUser)
            .ok_or(AppError::Unauthorized)
    }
}

fn caller_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}
