//! Mentorflow HTTP API server (Axum).
//!
//! Provides endpoints for the mentorship agents, the two prompt-chain
//! workflows, the research-journey helpers, topic suggestion, professor
//! verification, session history and health.

pub mod error;
pub mod routes;
pub mod state;

use std::path::Path;

use axum::{extract::DefaultBodyLimit, Router};
use mf_core::MentorflowConfig;
use state::AppState;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Read configuration after loading a dotenv file into the process environment.
///
/// With no path, `.env` is searched for from the working directory upward.
/// Variables already set in the environment are not overridden.
pub fn load_config(env_file: Option<&Path>) -> mf_core::Result<MentorflowConfig> {
    let loaded = match env_file {
        Some(path) => dotenv::from_path(path).map(|_| path.to_path_buf()),
        None => dotenv::dotenv(),
    };
    match loaded {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded dotenv file"),
        Err(e) => tracing::debug!(error = %e, "no dotenv file loaded"),
    }
    MentorflowConfig::from_env()
}

/// Build the application router with default state and no providers.
pub fn app() -> Router {
    app_with_state(AppState::default())
}

/// Build the application router with a custom state.
pub fn app_with_state(state: AppState) -> Router {
    let body_limit = state.config.server.max_body_bytes;
    Router::new()
        .merge(routes::health_routes())
        .merge(routes::agent_routes())
        .merge(routes::workflow_routes())
        .merge(routes::journey_routes())
        .merge(routes::session_routes())
        .fallback(routes::not_found)
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
