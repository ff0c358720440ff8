pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod services;
pub mod state;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::inquiry::index_page))
        .route("/api/inquiry", post(handlers::inquiry::submit_inquiry))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
