use super::DocumentStore;

/// True only when the company record exists and its role equals `admin_role`.
/// Lookup failures are logged and answered with `false`.
pub async fn is_admin(store: &dyn DocumentStore, admin_role: &str, user_id: &str) -> bool {
    match store.company_by_id(user_id).await {
        Ok(Some(company)) => company.role.as_deref() == Some(admin_role),
        Ok(None) => {
            tracing::warn!(user_id, "admin check: company not found");
            false
        }
        Err(err) => {
            tracing::error!(user_id, error = ?err, "admin check: store lookup failed");
            false
        }
    }
}
