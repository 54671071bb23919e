// Copyright (C) 2023-2025 The Chia-RS Project.
//
// response.rs file belongs to the chia-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::rpc_error::{RpcError, RpcResult};
use serde_json::{Map, Value};

/// One decoded RPC response, before the success/failure split.
///
/// Chia services answer with a flat JSON object carrying a boolean
/// `success` flag next to the result fields, plus an `error` string when
/// the call was rejected.
#[derive(Debug, Clone)]
pub struct RpcResponse {
    payload: Map<String, Value>,
}

impl RpcResponse {
    /// Validates that the decoded body is a JSON object.
    pub fn from_value(method: &str, value: Value) -> RpcResult<Self> {
        match value {
            Value::Object(payload) => Ok(Self { payload }),
            other => Err(RpcError::decode(format!(
                "{method}: expected a JSON object, got {}",
                json_type(&other)
            ))),
        }
    }

    /// Whether the service reported success.
    ///
    /// A missing flag counts as success; a few routes answer with a bare
    /// payload. Only an explicit `false` marks a remote failure.
    pub fn success(&self) -> bool {
        !matches!(self.payload.get("success"), Some(Value::Bool(false)))
    }

    /// The remote-supplied error message, when present.
    pub fn error_message(&self) -> Option<&str> {
        self.payload.get("error").and_then(Value::as_str)
    }

    /// Splits the response into the payload mapping or the remote failure.
    pub fn into_result(self) -> RpcResult<Map<String, Value>> {
        if self.success() {
            Ok(self.payload)
        } else {
            let message = self
                .error_message()
                .unwrap_or("unspecified error")
                .to_string();
            Err(RpcError::remote(message, Some(self.payload)))
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_payload_passes_through_unchanged() {
        let value = json!({"success": true, "height": 7});
        let payload = RpcResponse::from_value("get_height_info", value.clone())
            .unwrap()
            .into_result()
            .unwrap();
        assert_eq!(Value::Object(payload), value);
    }

    #[test]
    fn missing_success_flag_counts_as_success() {
        let response =
            RpcResponse::from_value("healthz", json!({"status": "ok"})).unwrap();
        assert!(response.success());
        assert!(response.into_result().is_ok());
    }

    #[test]
    fn explicit_failure_carries_message_and_payload() {
        let value = json!({"success": false, "error": "insufficient funds"});
        let err = RpcResponse::from_value("send_transaction", value)
            .unwrap()
            .into_result()
            .unwrap_err();
        match &err {
            RpcError::Remote { message, payload } => {
                assert_eq!(message, "insufficient funds");
                assert!(payload.is_some());
            }
            other => panic!("expected remote error, got {other:?}"),
        }
    }

    #[test]
    fn failure_without_message_gets_a_fixed_one() {
        let err = RpcResponse::from_value("send_transaction", json!({"success": false}))
            .unwrap()
            .into_result()
            .unwrap_err();
        assert!(err.to_string().contains("unspecified error"));
    }

    #[test]
    fn non_object_body_is_a_decode_error() {
        let err = RpcResponse::from_value("get_routes", json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, RpcError::Decode { .. }));
        assert!(err.to_string().contains("an array"));
    }
}
