use std::sync::Arc;

use crate::config::Config;
use crate::jobs::JobDirectory;
use crate::roadmap::engine::RoadmapEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Wraps the read-only skill catalog loaded at startup.
    pub engine: RoadmapEngine,
    /// Pluggable job lookup. Default: StaticJobDirectory loaded from JOBS_PATH.
    pub jobs: Arc<dyn JobDirectory>,
}
