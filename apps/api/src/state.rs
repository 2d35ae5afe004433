use std::sync::Arc;

use crate::analysis::tokenizer::Tokenizer;
use crate::builder::store::ResumeStore;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Injected tokenizer. Built once at startup and shared read-only so
    /// tests can swap in fakes.
    pub tokenizer: Arc<dyn Tokenizer>,
    /// Builder persistence: JSON files on disk plus an in-memory cache.
    pub store: Arc<ResumeStore>,
}
