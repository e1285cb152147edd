//! Gateway reply decoding
//!
//! The gateway answers every call with a JSON object:
//! ```json
//! {
//!   "success": false,
//!   "message": "optional text",
//!   "error": {"user": "wrong user name"}
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Reply to a send call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendResponse {
    /// The gateway accepted the call
    pub success: bool,
    /// Free text from the gateway
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Error messages keyed by the offending parameter
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub error: BTreeMap<String, String>,
}

impl SendResponse {
    /// Error message for one parameter
    pub fn error_for(&self, key: &str) -> Option<&str> {
        self.error.get(key).map(String::as_str)
    }
}

/// Reply body could not be decoded
#[derive(Debug, Error)]
pub enum ResponseError {
    /// Not JSON, or not the expected object
    #[error("malformed response: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decode a reply body
pub fn decode_response(body: &str) -> Result<SendResponse, ResponseError> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_success() {
        let response = decode_response(r#"{"success":true}"#).unwrap();
        assert!(response.success);
        assert_eq!(response.message, None);
        assert!(response.error.is_empty());
    }

    #[test]
    fn test_decode_failure_with_errors() {
        let body = r#"{"success":false,"message":"rejected","error":{"user":"unknown user","from":"too long"}}"#;
        let response = decode_response(body).unwrap();
        assert!(!response.success);
        assert_eq!(response.message.as_deref(), Some("rejected"));
        assert_eq!(response.error_for("user"), Some("unknown user"));
        assert_eq!(response.error_for("password"), None);
    }

    #[test]
    fn test_decode_malformed() {
        assert!(matches!(decode_response("not json"), Err(ResponseError::Json(_))));
        assert!(decode_response(r#"{"message":"no success flag"}"#).is_err());
    }

    #[test]
    fn test_serialize_skips_empty_parts() {
        let json = serde_json::to_string(&SendResponse {
            success: true,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(json, r#"{"success":true}"#);
    }
}
