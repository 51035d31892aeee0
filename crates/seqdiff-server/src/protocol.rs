//! Request and response bodies of the compare endpoint.

use serde::{de, Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

/// HTTP endpoint paths.
pub mod endpoints {
    pub const COMPARE: &str = "/api/compare";
}

/// File name offered to the client for the downloaded report.
pub const REPORT_FILENAME: &str = "diferencias.txt";
pub const REPORT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// The two texts to compare.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareRequest {
    pub seq_a: String,
    pub seq_b: String,
}

impl CompareRequest {
    /// Decode a request body.
    ///
    /// A body that is not JSON at all is [`ServerError::InvalidJson`]; valid
    /// JSON without string fields `seqA` and `seqB` is
    /// [`ServerError::SchemaViolation`]. Other fields are ignored.
    pub fn from_body(body: &[u8]) -> ServerResult<Self> {
        let value: serde_json::Value =
            serde_json::from_slice(body).map_err(ServerError::InvalidJson)?;
        // Derived struct deserialization would also accept a two-element array.
        if !value.is_object() {
            return Err(ServerError::SchemaViolation(de::Error::custom(
                "expected a JSON object",
            )));
        }
        serde_json::from_value(value).map_err(ServerError::SchemaViolation)
    }
}

/// Usage description returned by `GET`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UsageResponse {
    pub message: String,
    pub usage: String,
}

impl Default for UsageResponse {
    fn default() -> Self {
        Self {
            message: format!(
                "API de comparación de ADN (usa POST para {}).",
                endpoints::COMPARE
            ),
            usage: r#"POST con JSON: {"seqA": "...", "seqB": "..."}"#.into(),
        }
    }
}

/// Body of every error response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_both_fields() {
        let req = CompareRequest::from_body(br#"{"seqA": "a\nb", "seqB": "a"}"#).unwrap();
        assert_eq!(req.seq_a, "a\nb");
        assert_eq!(req.seq_b, "a");
    }

    #[test]
    fn extra_fields_are_ignored() {
        let req = CompareRequest::from_body(br#"{"seqA": "", "seqB": "", "name": 1}"#).unwrap();
        assert!(req.seq_a.is_empty());
    }

    #[test]
    fn malformed_json_is_invalid_json() {
        let err = CompareRequest::from_body(b"{seqA:").unwrap_err();
        assert!(matches!(err, ServerError::InvalidJson(_)));
    }

    #[test]
    fn non_utf8_is_invalid_json() {
        let err = CompareRequest::from_body(&[0xff, 0xfe, 0x7b]).unwrap_err();
        assert!(matches!(err, ServerError::InvalidJson(_)));
    }

    #[test]
    fn missing_field_is_schema_violation() {
        let err = CompareRequest::from_body(br#"{"seqA": "x"}"#).unwrap_err();
        assert!(matches!(err, ServerError::SchemaViolation(_)));
    }

    #[test]
    fn non_string_field_is_schema_violation() {
        let err = CompareRequest::from_body(br#"{"seqA": "x", "seqB": 42}"#).unwrap_err();
        assert!(matches!(err, ServerError::SchemaViolation(_)));

        let err = CompareRequest::from_body(br#"{"seqA": null, "seqB": "y"}"#).unwrap_err();
        assert!(matches!(err, ServerError::SchemaViolation(_)));
    }

    #[test]
    fn non_object_is_schema_violation() {
        let err = CompareRequest::from_body(br#"["a", "b"]"#).unwrap_err();
        assert!(matches!(err, ServerError::SchemaViolation(_)));
    }

    #[test]
    fn usage_mentions_endpoint() {
        let usage = UsageResponse::default();
        assert!(usage.message.contains("/api/compare"));
        assert!(usage.usage.contains("seqA"));
    }
}
