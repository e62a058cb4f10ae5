use anyhow::{Context, Result};
use std::{fs, io::ErrorKind};

use crate::models::SeedData;

use super::MongoStore;

/// Reads the seed file. A missing file means "nothing to seed".
pub fn load_seed_file(path: &str) -> Result<Option<SeedData>> {
    match fs::read_to_string(path) {
        Ok(contents) => {
            let data = serde_json::from_str::<SeedData>(&contents)
                .with_context(|| format!("invalid seed file {path}"))?;
            Ok(Some(data))
        }
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::info!(path, "no seed file, skipping seed");
            Ok(None)
        }
        Err(err) => Err(err).with_context(|| format!("cannot read seed file {path}")),
    }
}

pub async fn seed_store(store: &MongoStore, data: &SeedData) -> Result<()> {
    if !data.companies.is_empty() {
        store.companies.insert_many(&data.companies).await?;
    }
    if !data.documents.is_empty() {
        store.documents.insert_many(&data.documents).await?;
    }
    tracing::info!(
        companies = data.companies.len(),
        documents = data.documents.len(),
        "seeded document store"
    );
    Ok(())
}
