//! JSON-RPC envelope codec.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use zbx_core::{ApiError, DecodeError};

/// Protocol version carried by every envelope.
pub(crate) const PROTOCOL_VERSION: &str = "2.0";

/// Request id. Constant: the remote does not correlate by id and requests
/// are never pipelined on a single exchange.
pub(crate) const REQUEST_ID: i64 = 1;

/// The outbound envelope wrapping one method call.
#[derive(Debug, Serialize)]
pub(crate) struct RequestEnvelope<'a, P: Serialize + ?Sized> {
    jsonrpc: &'static str,
    method: &'a str,
    params: &'a P,
    id: i64,
}

impl<'a, P: Serialize + ?Sized> RequestEnvelope<'a, P> {
    pub(crate) fn new(method: &'a str, params: &'a P) -> Self {
        Self {
            jsonrpc: PROTOCOL_VERSION,
            method,
            params,
            id: REQUEST_ID,
        }
    }

    /// Serialize the envelope to its wire form.
    pub(crate) fn encode(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

/// The inbound envelope.
///
/// `result` may be any JSON shape (object, array, scalar, null); this layer
/// does not interpret it, that is the projector's job. Absence of `error`
/// means success regardless of the shape of `result`.
#[derive(Debug, Deserialize)]
pub(crate) struct ResponseEnvelope {
    #[serde(default)]
    #[allow(dead_code)]
    pub jsonrpc: String,
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    #[allow(dead_code)]
    pub id: Option<i64>,
    #[serde(default)]
    pub error: Option<ApiError>,
}

/// Parse a response body into an envelope.
pub(crate) fn decode(body: &[u8]) -> Result<ResponseEnvelope, DecodeError> {
    serde_json::from_slice(body).map_err(|e| DecodeError {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn encode_produces_fixed_envelope() {
        let params = json!({"output": "extend"});
        let body = RequestEnvelope::new("host.get", &params).encode().unwrap();
        let value: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            value,
            json!({
                "jsonrpc": "2.0",
                "method": "host.get",
                "params": {"output": "extend"},
                "id": 1,
            })
        );
    }

    #[test]
    fn decode_tolerates_any_result_shape() {
        let shapes = [
            json!({"hostids": ["10501"]}),
            json!(["a", "b"]),
            json!("7.2.3"),
            json!(true),
            json!(null),
        ];
        for result in shapes {
            let body = serde_json::to_vec(&json!({
                "jsonrpc": "2.0",
                "result": result,
                "id": 1,
            }))
            .unwrap();
            let envelope = decode(&body).unwrap();
            assert!(envelope.error.is_none());
        }
    }

    #[test]
    fn decode_extracts_error_object() {
        let body =
            br#"{"jsonrpc":"2.0","error":{"code":-32602,"message":"Invalid params.","data":"Missing."},"id":1}"#;
        let envelope = decode(body).unwrap();
        let error = envelope.error.unwrap();
        assert_eq!(error.code, -32602);
        assert_eq!(error.message, "Invalid params.");
        assert_eq!(error.data, "Missing.");
    }

    #[test]
    fn error_absent_means_success_even_with_null_result() {
        let envelope = decode(br#"{"jsonrpc":"2.0","result":null,"id":1}"#).unwrap();
        assert!(envelope.error.is_none());
    }

    #[test]
    fn decode_rejects_malformed_body() {
        assert!(decode(b"Internal Server Error").is_err());
    }
}
