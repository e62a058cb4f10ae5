// state module: AppState, the DocumentStore seam, initialization, and re-exports.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use mongodb::Client;

use crate::{
    config::Config,
    models::{Company, Document},
};

mod companies;
mod documents;
mod seed;

pub use companies::*;
pub use documents::*;
pub use seed::*;

/// Read access to the document store.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn company_by_id(&self, id: &str) -> Result<Option<Company>>;

    /// Documents in store order, optionally restricted to one company.
    async fn list_documents(&self, company_id: Option<&str>) -> Result<Vec<Document>>;
}

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub http: reqwest::Client,
    pub admin_role: String,
    pub storage_bucket: Option<String>,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>, config: &Config) -> Self {
        Self {
            store,
            http: reqwest::Client::new(),
            admin_role: config.admin_role.clone(),
            storage_bucket: config.storage_bucket.clone(),
        }
    }
}

pub async fn init_state(config: &Config) -> Result<AppState> {
    let client = Client::with_uri_str(&config.mongodb_uri).await?;
    let store = MongoStore::new(&client.database(&config.mongodb_db));

    // Only seed when the store is effectively empty (no companies).
    if store.is_empty().await? {
        if let Some(data) = load_seed_file(&config.seed_file)? {
            seed_store(&store, &data).await?;
        }
    }

    Ok(AppState::new(Arc::new(store), config))
}
