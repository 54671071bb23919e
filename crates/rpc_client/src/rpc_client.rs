// Copyright (C) 2023-2025 The Chia-RS Project.
//
// rpc_client.rs file belongs to the chia-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::models::{RpcRequest, RpcResponse};
use crate::rpc_error::{RpcError, RpcResult};
use chia_config::{ClientConfig, Service, SslConfig};
use reqwest::{Client, Identity, Url};
use serde_json::{Map, Value};
use std::fs;
use std::time::Instant;
use tracing::{debug, warn};

/// The transport client issuing RPC calls against one Chia service.
///
/// Every call is one bounded HTTPS round trip: serialize the parameter
/// map, POST it to the method-named path, read the whole response body,
/// decode it, split success from remote failure. There is no retry, no
/// caching and no pagination state; the client holds no cross-call mutable
/// state, so one instance behind an [`std::sync::Arc`] serves any number
/// of concurrent callers.
#[derive(Debug)]
pub struct RpcClient {
    base_url: Url,
    http_client: Client,
}

impl RpcClient {
    /// Builds a client from a connection config.
    ///
    /// Certificate material referenced by the config is read here, once;
    /// the config itself performs no I/O. The service certificates are
    /// issued by the installation's own CA, so server verification is
    /// disabled and the client identity is what authenticates the peer
    /// pair.
    pub fn new(config: ClientConfig) -> RpcResult<Self> {
        let base_url = config.base_url()?;

        let mut builder = Client::builder()
            .timeout(config.timeout)
            .danger_accept_invalid_certs(true);
        if let Some(ssl) = &config.ssl {
            builder = builder.identity(load_identity(ssl)?);
        }
        let http_client = builder.build().map_err(RpcError::Transport)?;

        Ok(Self {
            base_url,
            http_client,
        })
    }

    /// Client for a service of the local installation, using its default
    /// port and private certificate pair.
    pub fn for_service(service: Service) -> RpcResult<Self> {
        Self::new(ClientConfig::for_service(service))
    }

    /// Wraps an existing HTTP client.
    ///
    /// The base URL must end with a trailing slash so method names join as
    /// path segments. Useful for callers managing their own connection
    /// pool, and for tests pointing at a plain-HTTP mock.
    pub fn with_client(http_client: Client, base_url: Url) -> Self {
        Self {
            base_url,
            http_client,
        }
    }

    /// The service base URL calls are issued against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Issues one RPC call and returns the decoded response payload.
    ///
    /// `method` is the remote procedure name, posted to as a path segment
    /// of the base URL; `params` is the flat parameter mapping the method
    /// expects. Per-method parameter shapes are the service's contract —
    /// the transport only guarantees serializability.
    ///
    /// The full payload mapping is returned, `success` flag included. A
    /// payload carrying `"success": false` fails with
    /// [`RpcError::Remote`]; a body that is not a JSON object fails with
    /// [`RpcError::Decode`]; connection, TLS and timeout failures surface
    /// as [`RpcError::Transport`].
    ///
    /// A call that times out or is cancelled may still have executed on
    /// the service — for state-changing methods the remote outcome is
    /// unknown to the caller, and resubmitting is the caller's decision.
    pub async fn call(
        &self,
        method: &str,
        params: Map<String, Value>,
    ) -> RpcResult<Map<String, Value>> {
        if method.is_empty() {
            return Err(RpcError::config("method name must not be empty"));
        }

        let started = Instant::now();
        let result = self.exchange(RpcRequest::new(method, params)).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match &result {
            Ok(_) => debug!(method, elapsed_ms, "rpc call succeeded"),
            Err(err) => warn!(method, elapsed_ms, error = %err, "rpc call failed"),
        }
        result
    }

    /// Issues a call that takes no parameters.
    pub async fn call_empty(&self, method: &str) -> RpcResult<Map<String, Value>> {
        self.call(method, Map::new()).await
    }

    async fn exchange(&self, request: RpcRequest) -> RpcResult<Map<String, Value>> {
        let endpoint = request.endpoint(&self.base_url)?;

        let response = self
            .http_client
            .post(endpoint)
            .json(&request.params)
            .send()
            .await?;

        // Consume the whole body before handing control back; responses
        // are never streamed.
        let body = response.bytes().await?;
        let value: Value = serde_json::from_slice(&body)
            .map_err(|err| RpcError::decode(format!("{}: {err}", request.method)))?;

        RpcResponse::from_value(&request.method, value)?.into_result()
    }
}

fn load_identity(ssl: &SslConfig) -> RpcResult<Identity> {
    let mut pem = fs::read(&ssl.cert_path).map_err(|err| {
        RpcError::config(format!(
            "cannot read certificate {}: {err}",
            ssl.cert_path.display()
        ))
    })?;
    let key = fs::read(&ssl.key_path).map_err(|err| {
        RpcError::config(format!(
            "cannot read private key {}: {err}",
            ssl.key_path.display()
        ))
    })?;
    pem.extend_from_slice(&key);
    Identity::from_pem(&pem)
        .map_err(|err| RpcError::config(format!("invalid certificate material: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_client(server_url: &str) -> RpcClient {
        let base = Url::parse(&format!("{server_url}/")).expect("server url");
        RpcClient::with_client(Client::new(), base)
    }

    #[tokio::test]
    async fn call_posts_params_to_the_method_path() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/get_wallet_balance")
            .match_header("content-type", "application/json")
            .match_body(mockito::Matcher::Json(json!({"wallet_id": 1})))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success": true, "wallet_balance": {"wallet_id": 1}}"#)
            .create();

        let client = test_client(&server.url());
        let mut params = Map::new();
        params.insert("wallet_id".to_string(), json!(1));
        let payload = client.call("get_wallet_balance", params).await.expect("payload");

        assert_eq!(payload.get("success"), Some(&json!(true)));
        assert_eq!(
            payload.get("wallet_balance"),
            Some(&json!({"wallet_id": 1}))
        );
    }

    #[tokio::test]
    async fn empty_method_is_rejected_before_the_network() {
        let client = test_client("http://127.0.0.1:9");
        let err = client.call("", Map::new()).await.unwrap_err();
        assert!(matches!(err, RpcError::Config { .. }));
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/get_connections")
            .with_status(200)
            .with_body("not json {")
            .create();

        let client = test_client(&server.url());
        let err = client.call_empty("get_connections").await.unwrap_err();
        assert!(matches!(err, RpcError::Decode { .. }));
        assert!(err.to_string().contains("get_connections"));
    }

    #[tokio::test]
    async fn remote_failure_surfaces_the_service_message() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/send_transaction")
            .with_status(200)
            .with_body(r#"{"success": false, "error": "insufficient funds"}"#)
            .create();

        let client = test_client(&server.url());
        let err = client.call_empty("send_transaction").await.unwrap_err();
        match err {
            RpcError::Remote { message, payload } => {
                assert_eq!(message, "insufficient funds");
                assert!(payload.expect("payload").contains_key("success"));
            }
            other => panic!("expected remote error, got {other:?}"),
        }
    }
}
