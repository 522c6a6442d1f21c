pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::roadmap::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/roadmap/generate", post(handlers::handle_generate))
        .route("/api/roadmap/skills", get(handlers::handle_list_skills))
        .with_state(state)
}
