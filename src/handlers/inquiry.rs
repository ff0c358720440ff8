use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::Json;

use crate::errors::AppError;
use crate::models::{InquiryForm, Presentation};
use crate::services::{inquiry, presenter};
use crate::state::AppState;

static INDEX_HTML: &str = include_str!("../web/index.html");

pub async fn index_page() -> Html<&'static str> {
    Html(INDEX_HTML)
}

// POST /api/inquiry
pub async fn submit_inquiry(
    State(state): State<Arc<AppState>>,
    Json(form): Json<InquiryForm>,
) -> Result<Json<Presentation>, AppError> {
    tracing::info!(name = %form.name.trim(), email = %form.email.trim(), "incoming inquiry");

    let inquiry = form.validate().inspect_err(|e| {
        tracing::info!(error = %e, "rejected incomplete inquiry");
    })?;

    let outcome = inquiry::process_inquiry(state, inquiry).await;
    tracing::info!(outcome = ?outcome.kind(), "inquiry finished");

    Ok(Json(presenter::present(&outcome)))
}
