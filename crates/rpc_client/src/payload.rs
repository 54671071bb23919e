// Copyright (C) 2023-2025 The Chia-RS Project.
//
// payload.rs file belongs to the chia-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Crate-internal helpers shared by the endpoint APIs for shaping
//! parameter maps and picking fields out of response payloads.

use crate::rpc_error::{RpcError, RpcResult};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Converts a `json!` object literal into the flat parameter map
/// [`crate::RpcClient::call`] expects.
pub(crate) fn params(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        // Callers only pass `json!({ ... })` literals, which are objects.
        _ => unreachable!("rpc parameters are built from object literals"),
    }
}

/// Removes `field` from a response payload, failing with a decode error
/// naming the method when the field is absent.
pub(crate) fn expect_field(
    payload: &mut Map<String, Value>,
    method: &str,
    field: &str,
) -> RpcResult<Value> {
    payload
        .remove(field)
        .ok_or_else(|| RpcError::decode(format!("{method}: response is missing `{field}`")))
}

/// Removes `field` from a response payload and deserializes it.
pub(crate) fn expect_typed<T: DeserializeOwned>(
    payload: &mut Map<String, Value>,
    method: &str,
    field: &str,
) -> RpcResult<T> {
    let value = expect_field(payload, method, field)?;
    serde_json::from_value(value)
        .map_err(|err| RpcError::decode(format!("{method}: invalid `{field}`: {err}")))
}

/// Deserializes the whole payload, for methods whose result fields live at
/// the top level next to the `success` flag.
pub(crate) fn from_payload<T: DeserializeOwned>(
    payload: Map<String, Value>,
    method: &str,
) -> RpcResult<T> {
    serde_json::from_value(Value::Object(payload))
        .map_err(|err| RpcError::decode(format!("{method}: invalid response payload: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn expect_field_names_method_and_field() {
        let mut payload = params(json!({"success": true}));
        let err = expect_field(&mut payload, "get_wallets", "wallets").unwrap_err();
        assert!(err.to_string().contains("get_wallets"));
        assert!(err.to_string().contains("wallets"));
    }

    #[test]
    fn expect_typed_deserializes_removed_field() {
        let mut payload = params(json!({"success": true, "height": 42}));
        let height: u32 = expect_typed(&mut payload, "get_height_info", "height").unwrap();
        assert_eq!(height, 42);
        assert!(!payload.contains_key("height"));
    }
}
