use std::sync::Arc;

use crate::compile::CompilePipeline;
use crate::config::Config;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    /// Ordered PDF compile pipeline: remote backends first, local fallbacks last.
    pub compiler: Arc<CompilePipeline>,
    #[allow(dead_code)]
    pub config: Config,
}
