use anyhow::Result;
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{self, Bson, doc},
};

use crate::models::{Company, Document};

use super::DocumentStore;

/// MongoDB-backed store over the `companies` and `documents` collections.
#[derive(Clone)]
pub struct MongoStore {
    pub companies: Collection<Company>,
    pub documents: Collection<Document>,
}

impl MongoStore {
    pub fn new(db: &Database) -> Self {
        Self {
            companies: db.collection::<Company>("companies"),
            documents: db.collection::<Document>("documents"),
        }
    }

    pub async fn is_empty(&self) -> Result<bool> {
        let count = self.companies.estimated_document_count().await?;
        Ok(count == 0)
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn company_by_id(&self, id: &str) -> Result<Option<Company>> {
        self.companies
            .find_one(doc! { "_id": id })
            .await
            .map_err(Into::into)
    }

    async fn list_documents(&self, company_id: Option<&str>) -> Result<Vec<Document>> {
        let filter = match company_id {
            Some(id) => doc! { "companyId": id },
            None => doc! {},
        };
        // Read raw so one badly shaped record is skipped instead of failing the listing.
        let mut cursor = self
            .documents
            .clone_with_type::<bson::Document>()
            .find(filter)
            .await?;
        let mut documents = Vec::new();
        while let Some(raw) = cursor.try_next().await? {
            let id = raw.get("_id").map(Bson::to_string).unwrap_or_default();
            match bson::from_document::<Document>(raw) {
                Ok(document) => documents.push(document),
                Err(err) => tracing::warn!(id = %id, error = %err, "skipping malformed document"),
            }
        }
        Ok(documents)
    }
}
