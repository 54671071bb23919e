// Copyright (C) 2023-2025 The Chia-RS Project.
//
// wallet_management_api.rs file belongs to the chia-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::models::WalletInfo;
use crate::payload::{expect_typed, params};
use crate::rpc_client::RpcClient;
use crate::rpc_error::RpcResult;
use serde_json::{json, Map, Value};
use std::sync::Arc;

/// Creation and listing of the wallets under the logged-in key.
pub struct WalletManagementApi {
    rpc_client: Arc<RpcClient>,
}

impl WalletManagementApi {
    /// Creates the wallet management API over an existing client.
    pub fn new(rpc_client: Arc<RpcClient>) -> Self {
        Self { rpc_client }
    }

    /// Lists the wallets of the logged-in key.
    pub async fn get_wallets(&self, include_data: bool) -> RpcResult<Vec<WalletInfo>> {
        let mut payload = self
            .rpc_client
            .call("get_wallets", params(json!({"include_data": include_data})))
            .await?;
        expect_typed(&mut payload, "get_wallets", "wallets")
    }

    /// Creates a wallet of the given type.
    ///
    /// `options` carries the type-specific creation parameters (asset id
    /// for CAT wallets, DID amount and backup ids, pool setup, ...); they
    /// are merged into the request next to `wallet_type`.
    pub async fn create_new_wallet(
        &self,
        wallet_type: &str,
        options: Map<String, Value>,
    ) -> RpcResult<Map<String, Value>> {
        let mut request = params(json!({"wallet_type": wallet_type}));
        request.extend(options);
        self.rpc_client.call("create_new_wallet", request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::{Client, Url};

    fn api(server_url: &str) -> WalletManagementApi {
        let base = Url::parse(&format!("{server_url}/")).expect("server url");
        WalletManagementApi::new(Arc::new(RpcClient::with_client(Client::new(), base)))
    }

    #[tokio::test]
    async fn get_wallets_extracts_the_listing() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/get_wallets")
            .match_body(mockito::Matcher::Json(json!({"include_data": false})))
            .with_status(200)
            .with_body(
                r#"{"success": true, "wallets": [
                    {"id": 1, "name": "Chia Wallet", "type": 0, "data": ""},
                    {"id": 2, "name": "CAT one", "type": 6, "data": "00"}
                ]}"#,
            )
            .create();

        let wallets = api(&server.url()).get_wallets(false).await.expect("wallets");
        assert_eq!(wallets.len(), 2);
        assert_eq!(wallets[1].wallet_type, 6);
    }

    #[tokio::test]
    async fn create_new_wallet_merges_type_options() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/create_new_wallet")
            .match_body(mockito::Matcher::Json(json!({
                "wallet_type": "cat_wallet",
                "mode": "existing",
                "asset_id": "0xa1",
            })))
            .with_status(200)
            .with_body(r#"{"success": true, "wallet_id": 3, "type": 6}"#)
            .create();

        let mut options = Map::new();
        options.insert("mode".to_string(), json!("existing"));
        options.insert("asset_id".to_string(), json!("0xa1"));
        let payload = api(&server.url())
            .create_new_wallet("cat_wallet", options)
            .await
            .expect("payload");
        assert_eq!(payload.get("wallet_id"), Some(&json!(3)));
    }
}
