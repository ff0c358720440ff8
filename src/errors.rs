use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::models::{Field, Outcome};
use crate::services::presenter;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("missing required fields: {}", Field::labels(.0))]
    Validation(Vec<Field>),

    #[error("transport error: {0:#}")]
    Transport(anyhow::Error),

    #[error("malformed UTF-8 in agent response: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("malformed JSON payload: {0}")]
    Json(#[from] serde_json::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(missing) => {
                let body = presenter::present(&Outcome::ValidationFailed { missing });
                (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(body)).into_response()
            }
            other => {
                let status = match &other {
                    AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
                    _ => StatusCode::BAD_GATEWAY,
                };
                let body = serde_json::json!({ "error": other.to_string() });
                (status, axum::Json(body)).into_response()
            }
        }
    }
}
