use axum::middleware::from_fn_with_state;
use axum::routing::{delete, patch, post};
use axum::{routing::get, Router};

use super::handlers;
use super::handlers::probes::{healthz, livez};
use super::middlewares::authn;
use super::state::AppState;
use crate::prelude::Result;

pub async fn build_routes() -> Result<Router> {
    let state = AppState::new().await?;
    let app = Router::new()
        .route("/jobs", get(handlers::jobs::list))
        .route("/jobs", post(handlers::jobs::create))
        .route("/jobs/mine", get(handlers::jobs::list_mine))
        .route("/jobs/saved", get(handlers::saved_jobs::list))
        .route("/jobs/{id}", get(handlers::jobs::details))
        .route("/jobs/{id}", delete(handlers::jobs::remove))
        .route("/jobs/{id}/status", patch(handlers::jobs::set_hiring_status))
        .route("/jobs/{id}/save", post(handlers::saved_jobs::toggle))
        .route("/companies", get(handlers::companies::list))
        .layer(from_fn_with_state(state.clone(), authn::authenticate))
        .route("/healthz", get(healthz))
        .route("/livez", get(livez))
        .with_state(state);

    Ok(app)
}
