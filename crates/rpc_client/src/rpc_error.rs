// Copyright (C) 2023-2025 The Chia-RS Project.
//
// rpc_error.rs file belongs to the chia-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Error taxonomy for RPC calls.

use serde_json::{Map, Value};
use thiserror::Error;

/// Failure of one RPC exchange, split by where the fault lies.
///
/// The split is what callers act on: a transport failure is a network
/// problem and may be worth a retry, a decode failure needs a fix on the
/// service side, and a remote failure is the service rejecting the request
/// itself.
#[derive(Error, Debug)]
pub enum RpcError {
    /// Client-side construction problems: invalid endpoint, unreadable
    /// certificate material.
    #[error("invalid client configuration: {message}")]
    Config {
        /// What went wrong.
        message: String,
    },

    /// The exchange never completed: connection refused, TLS failure, or
    /// the configured timeout elapsed. A timed-out submission may still
    /// have executed remotely.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not the JSON object the protocol promises.
    #[error("malformed RPC response: {message}")]
    Decode {
        /// What was malformed, prefixed with the method name.
        message: String,
    },

    /// The service executed the call and reported failure.
    #[error("remote call failed: {message}")]
    Remote {
        /// The remote-supplied error message.
        message: String,
        /// The full response payload, for callers that inspect more than
        /// the message.
        payload: Option<Map<String, Value>>,
    },
}

impl RpcError {
    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates a decode error.
    pub fn decode<S: Into<String>>(message: S) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Creates a remote error.
    pub fn remote<S: Into<String>>(message: S, payload: Option<Map<String, Value>>) -> Self {
        Self::Remote {
            message: message.into(),
            payload,
        }
    }

    /// The payload attached to a remote failure, if any.
    pub fn remote_payload(&self) -> Option<&Map<String, Value>> {
        match self {
            Self::Remote { payload, .. } => payload.as_ref(),
            _ => None,
        }
    }
}

impl From<chia_config::ConfigError> for RpcError {
    fn from(err: chia_config::ConfigError) -> Self {
        Self::Config {
            message: err.to_string(),
        }
    }
}

/// Result type for RPC operations.
pub type RpcResult<T> = std::result::Result<T, RpcError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn remote_payload_only_on_remote_kind() {
        let mut payload = Map::new();
        payload.insert("success".to_string(), json!(false));
        let err = RpcError::remote("insufficient funds", Some(payload));
        assert!(err.remote_payload().is_some());
        assert_eq!(err.to_string(), "remote call failed: insufficient funds");

        let err = RpcError::decode("get_block: not json");
        assert!(err.remote_payload().is_none());
    }
}
