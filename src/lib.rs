pub mod admin;
pub mod config;
pub mod error;
pub mod expiration;
pub mod filename;
pub mod models;
pub mod routes;
pub mod state;
