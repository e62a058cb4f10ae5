// config.rs
// Environment-driven settings; `.env` is loaded by main before this runs.

use std::{env, net::SocketAddr};

use anyhow::{Context, Result};

pub const DEFAULT_ADMIN_ROLE: &str = "admin";

#[derive(Debug, Clone)]
pub struct Config {
    pub mongodb_uri: String,
    pub mongodb_db: String,
    pub admin_role: String,
    pub storage_bucket: Option<String>,
    pub bind_addr: SocketAddr,
    pub seed_file: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let bind_addr = env_or("BIND_ADDR", "0.0.0.0:8080")
            .parse()
            .context("BIND_ADDR must be a socket address like 0.0.0.0:8080")?;

        Ok(Self {
            mongodb_uri: env_or("MONGODB_URI", "mongodb://localhost:27017"),
            mongodb_db: env_or("MONGODB_DB", "documentos"),
            admin_role: env_or("ADMIN_ROLE", DEFAULT_ADMIN_ROLE),
            storage_bucket: env::var("STORAGE_BUCKET")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            bind_addr,
            seed_file: env_or("SEED_FILE", "./data/seed.json"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
