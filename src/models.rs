// models.rs
// Domain models for seed data and the MongoDB collections (companies, documents).

use mongodb::bson::Bson;
use serde::{Deserialize, Deserializer, Serialize};

/// Approval state of an uploaded document.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(from = "Option<String>", into = "String")]
pub enum DocumentStatus {
    Aprobado,
    Rechazado,
    #[default]
    Pendiente,
}

impl DocumentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Aprobado => "Aprobado",
            DocumentStatus::Rechazado => "Rechazado",
            DocumentStatus::Pendiente => "Pendiente",
        }
    }
}

// Anything the upload workflow writes that is not an explicit decision stays pending.
impl From<Option<String>> for DocumentStatus {
    fn from(value: Option<String>) -> Self {
        match value.unwrap_or_default().trim().to_lowercase().as_str() {
            "aprobado" => DocumentStatus::Aprobado,
            "rechazado" => DocumentStatus::Rechazado,
            _ => DocumentStatus::Pendiente,
        }
    }
}

impl From<DocumentStatus> for String {
    fn from(value: DocumentStatus) -> Self {
        value.as_str().to_string()
    }
}

/// Company document stored in MongoDB. The id doubles as the user id for role checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    #[serde(rename = "_id", deserialize_with = "id_as_string")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// Document record as written by the upload workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(rename = "_id", deserialize_with = "id_as_string")]
    pub id: String,
    pub company_id: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub name: String,
    /// Usually a `YYYY-MM-DD` string, but BSON dates and stray values show up too.
    #[serde(default)]
    pub expiration_date: Option<Bson>,
    #[serde(default)]
    pub status: DocumentStatus,
    #[serde(default)]
    pub file_url: Option<String>,
}

/// Seed file layout (data/seed.json).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub companies: Vec<Company>,
    #[serde(default)]
    pub documents: Vec<Document>,
}

/// Ids written by other clients may be ObjectIds; they are read as their hex form.
fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Bson::deserialize(deserializer)? {
        Bson::String(s) => s,
        Bson::ObjectId(oid) => oid.to_hex(),
        other => other.to_string(),
    })
}
