use std::sync::Arc;

use crate::config::Config;
use crate::ranking::scorer::SimilarityScorer;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only: nothing here changes after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable similarity scorer. Default: TfidfScorer.
    pub scorer: Arc<dyn SimilarityScorer>,
}
