use std::any::Any;
use std::sync::Arc;

use crate::models::{Inquiry, Outcome};
use crate::services::agent::{self, Answerer};
use crate::services::notifier::{self, Delivery, Notifier};
use crate::state::AppState;

/// Runs one validated submission end to end. Anything the flow does not
/// anticipate, panics included, comes back as `UnexpectedException`.
pub async fn process_inquiry(state: Arc<AppState>, inquiry: Inquiry) -> Outcome {
    let task = tokio::spawn(async move {
        run(state.answerer.as_ref(), state.notifier.as_ref(), inquiry).await
    });

    match task.await {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!(error = %e, "inquiry flow aborted");
            let message = if e.is_panic() {
                panic_message(e.into_panic())
            } else {
                e.to_string()
            };
            Outcome::UnexpectedException {
                answer: None,
                detail: format!("inquiry flow aborted: {message}"),
                message,
            }
        }
    }
}

/// Agent first, notifier second; the notifier only runs on a non-empty answer.
pub async fn run(answerer: &dyn Answerer, notifier: &dyn Notifier, inquiry: Inquiry) -> Outcome {
    let answer = match agent::ask(answerer, &inquiry.question).await {
        Ok(answer) => answer,
        Err(e) => {
            tracing::error!(error = %e, "agent call failed");
            return Outcome::AgentFailure {
                cause: e.to_string(),
                detail: format!("{e:?}"),
            };
        }
    };

    if answer.is_empty() {
        tracing::warn!(email = %inquiry.email, "agent returned no answer");
        return Outcome::AgentEmpty;
    }

    let answer = answer.text;
    let result = match notifier::notify(notifier, &inquiry, &answer).await {
        Ok(result) => result,
        Err(e) => {
            tracing::error!(error = %e, "notifier call failed");
            return Outcome::unexpected(&e, Some(answer));
        }
    };

    match notifier::interpret(result) {
        Delivery::Failed {
            status_code,
            payload,
        } => {
            tracing::warn!(status_code, "notifier invocation failed");
            Outcome::NotifierTransportFailure {
                answer,
                status_code,
                payload,
            }
        }
        Delivery::Rejected { message } => {
            tracing::warn!(error = %message, "notifier rejected the inquiry");
            Outcome::NotifierError { answer, message }
        }
        Delivery::Delivered {
            booking_id,
            email_status,
            email_warning,
        } => {
            tracing::info!(booking_id = %booking_id, email_status = %email_status, "inquiry delivered");
            Outcome::NotifierSuccess {
                answer,
                email: inquiry.email,
                booking_id,
                email_status,
                email_warning,
            }
        }
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic with non-string payload".to_string()
    }
}
