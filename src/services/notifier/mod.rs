pub mod lambda;

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::AppError;
use crate::models::notification::{display_value, is_truthy};
use crate::models::{Inquiry, NotificationRequest, NotificationResult};

/// Status the remote function reports for a completed synchronous invocation.
pub const SUCCESS_STATUS: i32 = 200;

/// Shown in place of a reference or email status the remote side omitted.
pub const UNAVAILABLE: &str = "N/A";

/// Raw result of one synchronous invocation.
#[derive(Clone, Debug, Default)]
pub struct Invocation {
    pub status_code: i32,
    pub payload: Vec<u8>,
    pub function_error: Option<String>,
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn invoke(&self, payload: Vec<u8>) -> anyhow::Result<Invocation>;
}

/// Hands the full transcript to the remote function and decodes its reply.
pub async fn notify(
    notifier: &dyn Notifier,
    inquiry: &Inquiry,
    answer: &str,
) -> Result<NotificationResult, AppError> {
    let body = serde_json::to_vec(&NotificationRequest {
        name: &inquiry.name,
        email: &inquiry.email,
        question: &inquiry.question,
        answer,
    })?;

    let invocation = notifier.invoke(body).await.map_err(AppError::Transport)?;

    tracing::info!(status_code = invocation.status_code, "notifier responded");
    if let Some(function_error) = &invocation.function_error {
        tracing::warn!(function_error = %function_error, "notifier reported a function error");
    }

    let payload = match serde_json::from_slice::<Value>(&invocation.payload) {
        Ok(payload) => payload,
        // A failed invocation is reported with its raw body whatever it holds.
        Err(_) if invocation.status_code != SUCCESS_STATUS => {
            Value::String(String::from_utf8_lossy(&invocation.payload).into_owned())
        }
        Err(e) => return Err(e.into()),
    };

    Ok(NotificationResult::new(invocation.status_code, payload))
}

#[derive(Clone, Debug, PartialEq)]
pub enum Delivery {
    Failed {
        status_code: i32,
        payload: Value,
    },
    Rejected {
        message: String,
    },
    Delivered {
        booking_id: String,
        email_status: String,
        email_warning: Option<String>,
    },
}

/// Transport status is checked first; the payload `error` key only matters
/// once the invocation itself succeeded.
pub fn interpret(result: NotificationResult) -> Delivery {
    if result.status_code != SUCCESS_STATUS {
        return Delivery::Failed {
            status_code: result.status_code,
            payload: result.payload,
        };
    }

    if let Some(error) = &result.error {
        return Delivery::Rejected {
            message: display_value(error),
        };
    }

    let or_unavailable = |value: Option<&Value>| {
        value
            .map(display_value)
            .unwrap_or_else(|| UNAVAILABLE.to_string())
    };

    Delivery::Delivered {
        booking_id: or_unavailable(result.booking_id.as_ref()),
        email_status: or_unavailable(result.email_status.as_ref()),
        email_warning: result
            .email_error
            .as_ref()
            .filter(|v| is_truthy(v))
            .map(display_value),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use serde_json::json;

    use super::*;

    struct CannedNotifier {
        response: Invocation,
        received: Mutex<Vec<Value>>,
    }

    impl CannedNotifier {
        fn new(status_code: i32, payload: &str) -> Self {
            Self {
                response: Invocation {
                    status_code,
                    payload: payload.as_bytes().to_vec(),
                    function_error: None,
                },
                received: Mutex::new(vec![]),
            }
        }
    }

    #[async_trait]
    impl Notifier for CannedNotifier {
        async fn invoke(&self, payload: Vec<u8>) -> anyhow::Result<Invocation> {
            self.received
                .lock()
                .unwrap()
                .push(serde_json::from_slice(&payload)?);
            Ok(self.response.clone())
        }
    }

    fn inquiry() -> Inquiry {
        Inquiry {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            question: "What is a tort?".to_string(),
        }
    }

    #[tokio::test]
    async fn notify_sends_full_transcript() {
        let notifier = CannedNotifier::new(200, r#"{"booking_id":"B1"}"#);
        let result = notify(&notifier, &inquiry(), "A civil wrong.").await.unwrap();

        assert_eq!(result.booking_id, Some(json!("B1")));
        let received = notifier.received.lock().unwrap();
        assert_eq!(
            received[0],
            json!({
                "name": "Jane Doe",
                "email": "jane@example.com",
                "question": "What is a tort?",
                "answer": "A civil wrong."
            })
        );
    }

    #[tokio::test]
    async fn undecodable_success_payload_is_an_error() {
        let notifier = CannedNotifier::new(200, "not json");
        let err = notify(&notifier, &inquiry(), "answer").await.unwrap_err();
        assert!(matches!(err, AppError::Json(_)));
    }

    #[tokio::test]
    async fn undecodable_failure_payload_is_kept_raw() {
        let notifier = CannedNotifier::new(502, "Bad Gateway");
        let result = notify(&notifier, &inquiry(), "answer").await.unwrap();
        assert_eq!(result.status_code, 502);
        assert_eq!(result.payload, json!("Bad Gateway"));
    }

    #[test]
    fn success_extracts_reference_and_status() {
        let delivery = interpret(NotificationResult::new(
            200,
            json!({"booking_id": "B123", "email_status": "250"}),
        ));
        assert_eq!(
            delivery,
            Delivery::Delivered {
                booking_id: "B123".to_string(),
                email_status: "250".to_string(),
                email_warning: None,
            }
        );
    }

    #[test]
    fn missing_keys_default_to_unavailable() {
        let delivery = interpret(NotificationResult::new(200, json!({})));
        assert_eq!(
            delivery,
            Delivery::Delivered {
                booking_id: UNAVAILABLE.to_string(),
                email_status: UNAVAILABLE.to_string(),
                email_warning: None,
            }
        );
    }

    #[test]
    fn email_error_is_a_warning_not_a_failure() {
        let delivery = interpret(NotificationResult::new(
            200,
            json!({"booking_id": "B124", "email_status": "550", "email_error": "bad address"}),
        ));
        match delivery {
            Delivery::Delivered {
                booking_id,
                email_warning,
                ..
            } => {
                assert_eq!(booking_id, "B124");
                assert_eq!(email_warning.as_deref(), Some("bad address"));
            }
            other => panic!("expected delivery, got {other:?}"),
        }
    }

    #[test]
    fn empty_email_error_is_ignored() {
        let delivery = interpret(NotificationResult::new(
            200,
            json!({"booking_id": "B125", "email_error": ""}),
        ));
        assert!(matches!(
            delivery,
            Delivery::Delivered {
                email_warning: None,
                ..
            }
        ));
    }

    #[test]
    fn error_key_is_remote_rejection() {
        let delivery = interpret(NotificationResult::new(
            200,
            json!({"error": "DB write failed", "booking_id": "B9"}),
        ));
        assert_eq!(
            delivery,
            Delivery::Rejected {
                message: "DB write failed".to_string()
            }
        );
    }

    #[test]
    fn transport_status_wins_over_payload() {
        let payload = json!({"booking_id": "B123", "error": "ignored"});
        let delivery = interpret(NotificationResult::new(500, payload.clone()));
        assert_eq!(
            delivery,
            Delivery::Failed {
                status_code: 500,
                payload
            }
        );
    }
}
