// Copyright (C) 2023-2025 The Chia-RS Project.
//
// key_management_api.rs file belongs to the chia-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::payload::{expect_typed, params};
use crate::rpc_client::RpcClient;
use crate::rpc_error::RpcResult;
use serde_json::{json, Map, Value};
use std::sync::Arc;

/// Key and fingerprint operations of the wallet service.
///
/// These manage which key the wallet is logged into; the keys themselves
/// never leave the service.
pub struct KeyManagementApi {
    rpc_client: Arc<RpcClient>,
}

impl KeyManagementApi {
    /// Creates the key management API over an existing client.
    pub fn new(rpc_client: Arc<RpcClient>) -> Self {
        Self { rpc_client }
    }

    /// Logs the wallet into the key with the given fingerprint.
    pub async fn log_in(&self, fingerprint: u32) -> RpcResult<Map<String, Value>> {
        self.rpc_client
            .call("log_in", params(json!({"fingerprint": fingerprint})))
            .await
    }

    /// The fingerprint the wallet is currently logged into.
    pub async fn get_logged_in_fingerprint(&self) -> RpcResult<u32> {
        let mut payload = self
            .rpc_client
            .call_empty("get_logged_in_fingerprint")
            .await?;
        expect_typed(&mut payload, "get_logged_in_fingerprint", "fingerprint")
    }

    /// Fingerprints of all keys stored by the service.
    pub async fn get_public_keys(&self) -> RpcResult<Vec<u32>> {
        let mut payload = self.rpc_client.call_empty("get_public_keys").await?;
        expect_typed(&mut payload, "get_public_keys", "public_key_fingerprints")
    }

    /// Key material details for one fingerprint.
    pub async fn get_private_key(&self, fingerprint: u32) -> RpcResult<Value> {
        let mut payload = self
            .rpc_client
            .call("get_private_key", params(json!({"fingerprint": fingerprint})))
            .await?;
        crate::payload::expect_field(&mut payload, "get_private_key", "private_key")
    }

    /// Generates a fresh 24-word mnemonic without storing it.
    pub async fn generate_mnemonic(&self) -> RpcResult<Vec<String>> {
        let mut payload = self.rpc_client.call_empty("generate_mnemonic").await?;
        expect_typed(&mut payload, "generate_mnemonic", "mnemonic")
    }

    /// Adds a key from its mnemonic words.
    pub async fn add_key(&self, mnemonic: &[String]) -> RpcResult<Map<String, Value>> {
        self.rpc_client
            .call("add_key", params(json!({"mnemonic": mnemonic})))
            .await
    }

    /// Reports what deleting the key would affect (balances, farming
    /// rewards) before committing to it.
    pub async fn check_delete_key(&self, fingerprint: u32) -> RpcResult<Map<String, Value>> {
        self.rpc_client
            .call("check_delete_key", params(json!({"fingerprint": fingerprint})))
            .await
    }

    /// Deletes the key with the given fingerprint.
    pub async fn delete_key(&self, fingerprint: u32) -> RpcResult<Map<String, Value>> {
        self.rpc_client
            .call("delete_key", params(json!({"fingerprint": fingerprint})))
            .await
    }

    /// Deletes every stored key.
    pub async fn delete_all_keys(&self) -> RpcResult<Map<String, Value>> {
        self.rpc_client.call_empty("delete_all_keys").await
    }

    /// Verifies a signature produced by `sign_message_by_address` or
    /// `sign_message_by_id`.
    pub async fn verify_signature(
        &self,
        message: &str,
        pubkey: &str,
        signature: &str,
        address: Option<&str>,
        signing_mode: Option<&str>,
    ) -> RpcResult<Map<String, Value>> {
        let mut request = params(json!({
            "message": message,
            "pubkey": pubkey,
            "signature": signature,
        }));
        if let Some(address) = address {
            request.insert("address".to_string(), json!(address));
        }
        if let Some(mode) = signing_mode {
            request.insert("signing_mode".to_string(), json!(mode));
        }
        self.rpc_client.call("verify_signature", request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::{Client, Url};

    fn api(server_url: &str) -> KeyManagementApi {
        let base = Url::parse(&format!("{server_url}/")).expect("server url");
        KeyManagementApi::new(Arc::new(RpcClient::with_client(Client::new(), base)))
    }

    #[tokio::test]
    async fn get_public_keys_extracts_fingerprints() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/get_public_keys")
            .with_status(200)
            .with_body(r#"{"success": true, "public_key_fingerprints": [3919172776, 1848295983]}"#)
            .create();

        let fingerprints = api(&server.url()).get_public_keys().await.expect("keys");
        assert_eq!(fingerprints, vec![3_919_172_776, 1_848_295_983]);
    }

    #[tokio::test]
    async fn verify_signature_omits_absent_options() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/verify_signature")
            .match_body(mockito::Matcher::Json(json!({
                "message": "hello",
                "pubkey": "0xaa",
                "signature": "0xbb",
            })))
            .with_status(200)
            .with_body(r#"{"success": true, "isValid": true}"#)
            .create();

        let payload = api(&server.url())
            .verify_signature("hello", "0xaa", "0xbb", None, None)
            .await
            .expect("payload");
        assert_eq!(payload.get("isValid"), Some(&json!(true)));
    }
}
