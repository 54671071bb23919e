// Copyright (C) 2023-2025 The Chia-RS Project.
//
// request.rs file belongs to the chia-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::rpc_error::{RpcError, RpcResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use url::Url;

/// One outbound RPC request: a method name and its flat parameter map.
///
/// Constructed fresh per call and discarded with it; requests carry no
/// identity beyond the call they belong to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcRequest {
    /// Remote procedure name; doubles as the endpoint path segment.
    pub method: String,
    /// Flat mapping of JSON-serializable parameters.
    pub params: Map<String, Value>,
}

impl RpcRequest {
    /// Creates a request for `method` with the given parameters.
    pub fn new(method: impl Into<String>, params: Map<String, Value>) -> Self {
        Self {
            method: method.into(),
            params,
        }
    }

    /// Resolves the method-named endpoint against a service base URL.
    pub fn endpoint(&self, base: &Url) -> RpcResult<Url> {
        base.join(&self.method).map_err(|err| {
            RpcError::config(format!("invalid method path `{}`: {err}", self.method))
        })
    }
}
