//! Response Envelope
//!
//! Every HTTP response in the application, success or failure, is
//! wrapped in the same envelope: `{ data | error, message }`. Success
//! responses carry `data` and never `error`; failures carry `error`
//! (a plain message or a structured per-field map) and never `data`.

use serde::Serialize;
use serde_json::Value;

/// Uniform response wrapper.
#[derive(Debug, Serialize)]
pub struct Envelope<T = Value> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
    pub message: String,
}

impl<T: Serialize> Envelope<T> {
    /// Success envelope: `data` set, `error` absent.
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            data: Some(data),
            error: None,
            message: message.into(),
        }
    }
}

impl Envelope {
    /// Failure envelope: `error` set, `data` absent.
    pub fn error(error: impl Into<Value>, message: impl Into<String>) -> Self {
        Self {
            data: None,
            error: Some(error.into()),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_omits_error_field() {
        let envelope = Envelope::success(json!({"id": 1}), "");
        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(value["data"]["id"], 1);
        assert_eq!(value["message"], "");
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_error_omits_data_field() {
        let envelope = Envelope::error("Route not found", "Route not found");
        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(value["error"], "Route not found");
        assert_eq!(value["message"], "Route not found");
        assert!(value.get("data").is_none());
    }

    #[test]
    fn test_error_accepts_structured_detail() {
        let envelope = Envelope::error(json!({"email": ["must be valid"]}), "validation failed");
        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(value["error"]["email"][0], "must be valid");
    }
}
