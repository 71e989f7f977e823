use std::sync::Arc;

use crate::analysis::Analyzer;
use crate::config::Config;
use crate::feedback::FeedbackClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Detector, extractors and scorer, built once at startup.
    pub analyzer: Arc<Analyzer>,
    pub feedback: FeedbackClient,
    pub config: Config,
}
