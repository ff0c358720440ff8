use serde::Serialize;
use serde_json::Value;

/// Body sent to the remote function for persistence and email dispatch.
#[derive(Clone, Debug, Serialize)]
pub struct NotificationRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub question: &'a str,
    pub answer: &'a str,
}

/// Decoded response of one notifier invocation. `payload` keeps the raw JSON
/// for diagnostics; the named keys are lifted out of it when it is an object.
#[derive(Clone, Debug, PartialEq)]
pub struct NotificationResult {
    pub status_code: i32,
    pub booking_id: Option<Value>,
    pub email_status: Option<Value>,
    pub email_error: Option<Value>,
    pub error: Option<Value>,
    pub payload: Value,
}

impl NotificationResult {
    pub fn new(status_code: i32, payload: Value) -> Self {
        let key = |name: &str| payload.as_object().and_then(|o| o.get(name)).cloned();
        Self {
            status_code,
            booking_id: key("booking_id"),
            email_status: key("email_status"),
            email_error: key("email_error"),
            error: key("error"),
            payload,
        }
    }
}

/// Strings render bare, everything else as JSON text.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Null, `false` and empty strings count as absent.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
        Value::Number(_) => true,
    }
}
