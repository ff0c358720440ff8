use std::fmt;

use serde::Serialize;
use serde_json::Value;

use super::Field;

/// Terminal state of one submission. Everything after validation is exactly
/// one of the non-`ValidationFailed` variants.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    ValidationFailed {
        missing: Vec<Field>,
    },
    AgentEmpty,
    AgentFailure {
        cause: String,
        detail: String,
    },
    NotifierError {
        answer: String,
        message: String,
    },
    NotifierSuccess {
        answer: String,
        email: String,
        booking_id: String,
        email_status: String,
        email_warning: Option<String>,
    },
    NotifierTransportFailure {
        answer: String,
        status_code: i32,
        payload: Value,
    },
    UnexpectedException {
        answer: Option<String>,
        message: String,
        detail: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    ValidationFailed,
    AgentEmpty,
    AgentFailure,
    NotifierError,
    NotifierSuccess,
    NotifierTransportFailure,
    UnexpectedException,
}

impl Outcome {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            Outcome::ValidationFailed { .. } => OutcomeKind::ValidationFailed,
            Outcome::AgentEmpty => OutcomeKind::AgentEmpty,
            Outcome::AgentFailure { .. } => OutcomeKind::AgentFailure,
            Outcome::NotifierError { .. } => OutcomeKind::NotifierError,
            Outcome::NotifierSuccess { .. } => OutcomeKind::NotifierSuccess,
            Outcome::NotifierTransportFailure { .. } => OutcomeKind::NotifierTransportFailure,
            Outcome::UnexpectedException { .. } => OutcomeKind::UnexpectedException,
        }
    }

    /// Builds the catch-all outcome, keeping the full error chain for the operator.
    pub fn unexpected<E: fmt::Display + fmt::Debug>(err: &E, answer: Option<String>) -> Self {
        Outcome::UnexpectedException {
            answer,
            message: format!("{err:#}"),
            detail: format!("{err:?}"),
        }
    }
}
