//! The uniform response envelope returned by every auth operation.

use serde::{Deserialize, Serialize};

/// Error surfaced to callers in place of a payload.
///
/// For upstream rejections the code mirrors the provider's HTTP status;
/// any other failure is reported as a generic 500 whose message carries
/// no internal detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationError {
    pub message: String,
    pub code: u16,
}

impl OperationError {
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code,
        }
    }
}

/// Response envelope: exactly one of `payload` / `error` is populated.
///
/// Callers always receive this shape, whatever happened upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub payload: Option<T>,
    pub error: Option<OperationError>,
}

impl<T> Envelope<T> {
    pub fn ok(payload: T) -> Self {
        Self {
            payload: Some(payload),
            error: None,
        }
    }

    pub fn err(error: OperationError) -> Self {
        Self {
            payload: None,
            error: Some(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_populates_only_payload() {
        let envelope = Envelope::ok("tokens");

        assert_eq!(envelope.payload, Some("tokens"));
        assert!(envelope.error.is_none());
    }

    #[test]
    fn test_err_populates_only_error() {
        let envelope: Envelope<String> = Envelope::err(OperationError::new(401, "rejected"));

        assert!(envelope.payload.is_none());
        let error = envelope.error.unwrap();
        assert_eq!(error.code, 401);
        assert_eq!(error.message, "rejected");
    }

    #[test]
    fn test_both_fields_serialize_as_nullable() {
        let envelope: Envelope<String> = Envelope::err(OperationError::new(500, "failed"));

        let value = serde_json::to_value(&envelope).unwrap();

        assert!(value["payload"].is_null());
        assert_eq!(value["error"]["code"], 500);
    }
}
