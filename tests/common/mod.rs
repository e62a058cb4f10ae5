#![allow(dead_code)]

use std::{
    env,
    sync::{Arc, Mutex, MutexGuard, OnceLock},
    time::{SystemTime, UNIX_EPOCH},
};

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use mongodb::{Client, bson::Bson};

use documentos::{
    config::Config,
    models::{Company, Document, DocumentStatus},
    state::{AppState, DocumentStore, MongoStore},
};

pub const ADMIN_ID: &str = "empresa-admin";
pub const STAFF_ID: &str = "empresa-staff";

/// In-memory store; `failing` makes every lookup return an error,
/// `failing_documents` only the document listing.
#[derive(Default)]
pub struct MemoryStore {
    pub companies: Vec<Company>,
    pub documents: Vec<Document>,
    pub failing: bool,
    pub failing_documents: bool,
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn company_by_id(&self, id: &str) -> Result<Option<Company>> {
        if self.failing {
            return Err(anyhow!("connection refused"));
        }
        Ok(self.companies.iter().find(|c| c.id == id).cloned())
    }

    async fn list_documents(&self, company_id: Option<&str>) -> Result<Vec<Document>> {
        if self.failing || self.failing_documents {
            return Err(anyhow!("connection refused"));
        }
        Ok(self
            .documents
            .iter()
            .filter(|d| company_id.is_none_or(|id| d.company_id == id))
            .cloned()
            .collect())
    }
}

pub fn company(id: &str, role: Option<&str>) -> Company {
    Company {
        id: id.to_string(),
        name: format!("Empresa {id}"),
        role: role.map(str::to_string),
    }
}

pub fn document(id: &str, company_id: &str, expiration: Option<&str>) -> Document {
    Document {
        id: id.to_string(),
        company_id: company_id.to_string(),
        company_name: format!("Empresa {company_id}"),
        category: "Legal".to_string(),
        name: format!("Documento {id}"),
        expiration_date: expiration.map(|raw| Bson::String(raw.to_string())),
        status: DocumentStatus::Pendiente,
        file_url: None,
    }
}

pub fn test_config() -> Config {
    Config {
        mongodb_uri: "mongodb://localhost:27017".to_string(),
        mongodb_db: "documentos_test".to_string(),
        admin_role: "admin".to_string(),
        storage_bucket: Some("documentos-test".to_string()),
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        seed_file: "./data/seed.json".to_string(),
    }
}

pub fn sample_store() -> MemoryStore {
    MemoryStore {
        companies: vec![
            company(ADMIN_ID, Some("admin")),
            company(STAFF_ID, Some("empresa")),
        ],
        documents: vec![
            document("d1", STAFF_ID, Some("2000-01-01")),
            document("d2", STAFF_ID, None),
            document("d3", STAFF_ID, Some("2999-12-31")),
            document("d4", ADMIN_ID, Some("no es una fecha")),
        ],
        ..Default::default()
    }
}

pub fn state_with(store: MemoryStore) -> Arc<AppState> {
    Arc::new(AppState::new(Arc::new(store), &test_config()))
}

/// Global lock so Mongo-backed tests run one-at-a-time.
static TEST_DB_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

pub struct MongoContext {
    pub store: MongoStore,
    pub db_name: String,
    client: Client,
    _guard: MutexGuard<'static, ()>,
}

pub async fn setup_mongo() -> Option<MongoContext> {
    let guard = TEST_DB_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    let uri = env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
    let db_name = format!(
        "documentostest_{}",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_millis()
    );

    let client = match Client::with_uri_str(&uri).await {
        Ok(c) => c,
        Err(err) => {
            eprintln!("Skipping test; cannot connect to MongoDB: {err:?}");
            return None;
        }
    };
    if let Err(err) = client.database(&db_name).drop().await {
        eprintln!("Skipping test; cannot drop test DB: {err:?}");
        return None;
    }

    Some(MongoContext {
        store: MongoStore::new(&client.database(&db_name)),
        db_name,
        client,
        _guard: guard,
    })
}

pub async fn teardown(ctx: MongoContext) {
    let _ = ctx.client.database(&ctx.db_name).drop().await;
}
