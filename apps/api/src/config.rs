use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every setting has a sensible default; nothing is required.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Upload size cap in megabytes.
    pub max_upload_mb: usize,
    /// Directory where builder resumes are persisted as JSON.
    pub storage_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_upload_mb: std::env::var("MAX_UPLOAD_MB")
                .unwrap_or_else(|_| "10".to_string())
                .parse::<usize>()
                .context("MAX_UPLOAD_MB must be a number")?,
            storage_dir: std::env::var("STORAGE_DIR")
                .unwrap_or_else(|_| "data/resumes".to_string())
                .into(),
        })
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb * 1024 * 1024
    }
}
