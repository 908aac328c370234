use std::sync::Arc;

use crate::config::Config;
use crate::history::store::HistoryStore;
use crate::llm_client::GenerationProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable generation backend. Default: `GeminiClient`.
    pub provider: Arc<dyn GenerationProvider>,
    pub history: Arc<HistoryStore>,
    pub config: Config,
}
