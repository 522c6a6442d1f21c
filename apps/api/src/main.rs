mod config;
mod errors;
mod jobs;
mod roadmap;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::jobs::StaticJobDirectory;
use crate::roadmap::catalog::SkillCatalog;
use crate::roadmap::engine::RoadmapEngine;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Roadmap API v{}", env!("CARGO_PKG_VERSION"));

    // Skill catalog is loaded once and shared read-only for the life of the process
    let catalog = match &config.skill_catalog_path {
        Some(path) => SkillCatalog::from_json_file(path)
            .with_context(|| format!("Failed to load skill catalog from {}", path.display()))?,
        None => SkillCatalog::builtin().context("Embedded skill catalog is invalid")?,
    };
    if catalog.is_empty() {
        warn!("Skill catalog is empty; every skill will use default estimates");
    }
    info!("Skill catalog loaded ({} skills)", catalog.len());

    let jobs = StaticJobDirectory::load(&config.jobs_path)
        .with_context(|| format!("Failed to load jobs from {}", config.jobs_path.display()))?;
    if jobs.is_empty() {
        warn!("Job directory is empty; only inline target_job requests can be served");
    }

    info!("Default learning pace: {}", config.default_pace);

    let state = AppState {
        engine: RoadmapEngine::new(Arc::new(catalog)),
        jobs: Arc::new(jobs),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
