// expiration.rs
// Days-remaining computation, bucket assignment, filtering and the row projection
// used by the documents dashboard.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate};
use mongodb::bson::Bson;
use serde::{Deserialize, Serialize};

use crate::models::{Document, DocumentStatus};

/// Display category of a document. Every document lands in exactly one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Bucket {
    SinFecha,
    Vencidos,
    ConFecha,
}

impl Bucket {
    pub fn of(dias_restantes: Option<i64>) -> Self {
        match dias_restantes {
            None => Bucket::SinFecha,
            Some(d) if d < 0 => Bucket::Vencidos,
            Some(_) => Bucket::ConFecha,
        }
    }
}

/// Which buckets the caller wants to see.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentFilters {
    pub vencidos: bool,
    pub con_fecha: bool,
    pub sin_fecha: bool,
}

impl DocumentFilters {
    pub fn all() -> Self {
        Self {
            vencidos: true,
            con_fecha: true,
            sin_fecha: true,
        }
    }

    pub fn none() -> Self {
        Self {
            vencidos: false,
            con_fecha: false,
            sin_fecha: false,
        }
    }

    pub fn only(bucket: Bucket) -> Self {
        let mut filters = Self::none();
        match bucket {
            Bucket::SinFecha => filters.sin_fecha = true,
            Bucket::Vencidos => filters.vencidos = true,
            Bucket::ConFecha => filters.con_fecha = true,
        }
        filters
    }

    pub fn includes(&self, bucket: Bucket) -> bool {
        match bucket {
            Bucket::SinFecha => self.sin_fecha,
            Bucket::Vencidos => self.vencidos,
            Bucket::ConFecha => self.con_fecha,
        }
    }
}

impl Default for DocumentFilters {
    fn default() -> Self {
        Self::all()
    }
}

/// Urgency color shown next to a deadline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DeadlineColor {
    Gray,
    Red,
    Orange,
    Yellow,
    Green,
}

/// Default urgency palette. Accepts any signed day-count, or none for undated documents.
pub fn deadline_color(dias_restantes: Option<i64>) -> DeadlineColor {
    match dias_restantes {
        None => DeadlineColor::Gray,
        Some(d) if d < 0 => DeadlineColor::Red,
        Some(d) if d <= 7 => DeadlineColor::Orange,
        Some(d) if d <= 30 => DeadlineColor::Yellow,
        Some(_) => DeadlineColor::Green,
    }
}

/// Parses a stored expiration date. Accepts `YYYY-MM-DD` and RFC 3339 timestamps;
/// anything else is treated as no date.
pub fn parse_expiration(raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.date_naive())
}

/// Reads the stored expiration field. Strings go through [`parse_expiration`],
/// BSON dates keep their UTC calendar day, anything else counts as no date.
pub fn expiration_of(value: Option<&Bson>) -> Option<NaiveDate> {
    match value? {
        Bson::String(raw) => parse_expiration(Some(raw.as_str())),
        Bson::DateTime(dt) => {
            DateTime::from_timestamp_millis(dt.timestamp_millis()).map(|utc| utc.date_naive())
        }
        _ => None,
    }
}

pub fn dias_restantes(expiration: Option<NaiveDate>, today: NaiveDate) -> Option<i64> {
    expiration.map(|date| (date - today).num_days())
}

pub fn bucket_of(document: &Document, today: NaiveDate) -> Bucket {
    let expiration = expiration_of(document.expiration_date.as_ref());
    Bucket::of(dias_restantes(expiration, today))
}

/// Keeps the documents whose bucket is enabled in `filters`, in input order.
pub fn filter_documents<'a>(
    documents: &'a [Document],
    filters: &DocumentFilters,
    today: NaiveDate,
) -> Vec<&'a Document> {
    documents
        .iter()
        .filter(|doc| filters.includes(bucket_of(doc, today)))
        .collect()
}

pub fn expiration_label(expiration: Option<NaiveDate>) -> String {
    match expiration {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => "Sin fecha".to_string(),
    }
}

pub fn deadline_label(dias_restantes: Option<i64>) -> String {
    match dias_restantes {
        None => "Sin fecha".to_string(),
        Some(0) => "Vence hoy".to_string(),
        Some(1) => "Vence en 1 día".to_string(),
        Some(-1) => "Vencido hace 1 día".to_string(),
        Some(d) if d < 0 => format!("Vencido hace {} días", -d),
        Some(d) => format!("Vence en {d} días"),
    }
}

/// One dashboard row: the stored document plus everything derived for display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentView {
    pub id: String,
    pub company_id: String,
    pub company_name: String,
    pub category: String,
    pub name: String,
    pub status: DocumentStatus,
    pub expiration_date: Option<NaiveDate>,
    pub file_url: Option<String>,
    pub dias_restantes: Option<i64>,
    pub bucket: Bucket,
    pub color: DeadlineColor,
    pub expiration_label: String,
    pub deadline_label: String,
}

impl DocumentView {
    pub fn build<F>(document: &Document, today: NaiveDate, color: &F) -> Self
    where
        F: Fn(Option<i64>) -> DeadlineColor,
    {
        let expiration = expiration_of(document.expiration_date.as_ref());
        let dias = dias_restantes(expiration, today);
        Self {
            id: document.id.clone(),
            company_id: document.company_id.clone(),
            company_name: document.company_name.clone(),
            category: document.category.clone(),
            name: document.name.clone(),
            status: document.status,
            expiration_date: expiration,
            file_url: document.file_url.clone(),
            dias_restantes: dias,
            bucket: Bucket::of(dias),
            color: color(dias),
            expiration_label: expiration_label(expiration),
            deadline_label: deadline_label(dias),
        }
    }
}

/// Classifies and filters in one pass with a caller-supplied color mapping.
pub fn classify_with<F>(
    documents: &[Document],
    filters: &DocumentFilters,
    today: NaiveDate,
    color: F,
) -> Vec<DocumentView>
where
    F: Fn(Option<i64>) -> DeadlineColor,
{
    documents
        .iter()
        .map(|doc| DocumentView::build(doc, today, &color))
        .filter(|view| filters.includes(view.bucket))
        .collect()
}

pub fn classify(
    documents: &[Document],
    filters: &DocumentFilters,
    today: NaiveDate,
) -> Vec<DocumentView> {
    classify_with(documents, filters, today, deadline_color)
}

/// Badge counts for the filter toggles plus a per-status breakdown.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BucketCounts {
    pub total: usize,
    pub vencidos: usize,
    pub con_fecha: usize,
    pub sin_fecha: usize,
    pub por_estado: BTreeMap<String, usize>,
}

impl BucketCounts {
    pub fn tally(views: &[DocumentView]) -> Self {
        let mut counts = Self::default();
        for view in views {
            counts.total += 1;
            match view.bucket {
                Bucket::Vencidos => counts.vencidos += 1,
                Bucket::ConFecha => counts.con_fecha += 1,
                Bucket::SinFecha => counts.sin_fecha += 1,
            }
            *counts
                .por_estado
                .entry(view.status.as_str().to_string())
                .or_insert(0) += 1;
        }
        counts
    }
}
