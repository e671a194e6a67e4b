//! Backend status: the outcome of the one-shot health probe.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ProbeError;

/// Message shown when the backend answers without one of its own.
pub const DEFAULT_MESSAGE: &str = "Connected";

/// JSON document served at `GET /api`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl StatusPayload {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    /// Read the payload leniently out of any JSON document.
    ///
    /// Only an object's `message` field counts. Falsy values (`null`,
    /// `false`, `0`, `""`) count as absent; other non-string values are
    /// kept in their JSON form.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let message = match value.get("message") {
            Some(Value::String(text)) => Some(text.clone()),
            Some(Value::Bool(true)) => Some("true".to_string()),
            Some(Value::Number(number)) if number.as_f64().is_some_and(|n| n != 0.0) => {
                Some(number.to_string())
            }
            Some(other @ (Value::Array(_) | Value::Object(_))) => Some(other.to_string()),
            _ => None,
        };
        Self { message }
    }

    /// The carried message, or [`DEFAULT_MESSAGE`] when absent or empty.
    #[must_use]
    pub fn message_or_default(&self) -> &str {
        match self.message.as_deref() {
            Some(m) if !m.is_empty() => m,
            _ => DEFAULT_MESSAGE,
        }
    }
}

/// Connectivity as last observed by the page.
///
/// Starts at [`Unknown`](Self::Unknown) and settles at most once per page
/// load into [`Ok`](Self::Ok) or [`Error`](Self::Error).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "message", rename_all = "lowercase")]
pub enum BackendStatus {
    #[default]
    Unknown,
    Ok(String),
    Error(String),
}

impl BackendStatus {
    #[must_use]
    pub fn is_settled(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Move from `Unknown` to `next`.
    ///
    /// Returns `false` and leaves `self` untouched when already settled or
    /// when `next` is itself `Unknown`.
    pub fn settle(&mut self, next: Self) -> bool {
        if self.is_settled() || !next.is_settled() {
            return false;
        }
        *self = next;
        true
    }
}

impl From<Result<String, ProbeError>> for BackendStatus {
    fn from(outcome: Result<String, ProbeError>) -> Self {
        match outcome {
            Ok(message) => Self::Ok(message),
            Err(err) => Self::Error(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_unknown() {
        assert_eq!(BackendStatus::default(), BackendStatus::Unknown);
        assert!(!BackendStatus::default().is_settled());
    }

    #[test]
    fn should_settle_once_from_unknown() {
        let mut status = BackendStatus::Unknown;
        assert!(status.settle(BackendStatus::Ok("Connected".to_string())));
        assert_eq!(status, BackendStatus::Ok("Connected".to_string()));
    }

    #[test]
    fn should_ignore_second_settlement() {
        let mut status = BackendStatus::Error("API 503".to_string());
        assert!(!status.settle(BackendStatus::Ok("late".to_string())));
        assert_eq!(status, BackendStatus::Error("API 503".to_string()));
    }

    #[test]
    fn should_not_settle_back_to_unknown() {
        let mut status = BackendStatus::Unknown;
        assert!(!status.settle(BackendStatus::Unknown));
        assert!(!status.is_settled());
    }

    #[test]
    fn should_map_probe_outcome_into_status() {
        let ok: BackendStatus = Ok::<_, ProbeError>("hello".to_string()).into();
        assert_eq!(ok, BackendStatus::Ok("hello".to_string()));

        let err: BackendStatus = Err::<String, _>(ProbeError::Status(503)).into();
        assert_eq!(err, BackendStatus::Error("API 503".to_string()));
    }

    #[test]
    fn should_default_message_when_payload_has_none() {
        let payload: StatusPayload = serde_json::from_str("{}").unwrap();
        assert_eq!(payload.message_or_default(), "Connected");

        let payload: StatusPayload = serde_json::from_str(r#"{"message":""}"#).unwrap();
        assert_eq!(payload.message_or_default(), "Connected");
    }

    #[test]
    fn should_keep_payload_message_when_present() {
        let payload: StatusPayload = serde_json::from_str(r#"{"message":"pong"}"#).unwrap();
        assert_eq!(payload.message_or_default(), "pong");
    }

    #[test]
    fn should_read_message_from_any_json_document() {
        let cases = [
            ("null", "Connected"),
            ("true", "Connected"),
            (r#""hi""#, "Connected"),
            ("[]", "Connected"),
            (r#"{"message":null}"#, "Connected"),
            (r#"{"message":false}"#, "Connected"),
            (r#"{"message":0}"#, "Connected"),
            (r#"{"message":42}"#, "42"),
            (r#"{"message":true}"#, "true"),
            (r#"{"message":"pong"}"#, "pong"),
        ];
        for (body, expected) in cases {
            let value: Value = serde_json::from_str(body).unwrap();
            assert_eq!(
                StatusPayload::from_value(&value).message_or_default(),
                expected,
                "body {body}"
            );
        }
    }

    #[test]
    fn should_omit_missing_message_when_serializing() {
        let json = serde_json::to_string(&StatusPayload::default()).unwrap();
        assert_eq!(json, "{}");
    }
}
