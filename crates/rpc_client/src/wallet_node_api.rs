// Copyright (C) 2023-2025 The Chia-RS Project.
//
// wallet_node_api.rs file belongs to the chia-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::models::{NetworkInfo, SyncStatus};
use crate::payload::{expect_typed, from_payload, params};
use crate::rpc_client::RpcClient;
use crate::rpc_error::RpcResult;
use serde_json::{json, Map, Value};
use std::sync::Arc;

/// Node-facing state of the wallet service: sync progress, network
/// identity, and spend submission.
pub struct WalletNodeApi {
    rpc_client: Arc<RpcClient>,
}

impl WalletNodeApi {
    /// Creates the wallet node API over an existing client.
    pub fn new(rpc_client: Arc<RpcClient>) -> Self {
        Self { rpc_client }
    }

    /// Sync state against the connected full node.
    pub async fn get_sync_status(&self) -> RpcResult<SyncStatus> {
        let payload = self.rpc_client.call_empty("get_sync_status").await?;
        from_payload(payload, "get_sync_status")
    }

    /// The wallet's current block height.
    pub async fn get_height_info(&self) -> RpcResult<u32> {
        let mut payload = self.rpc_client.call_empty("get_height_info").await?;
        expect_typed(&mut payload, "get_height_info", "height")
    }

    /// Network name and address prefix the service runs on.
    pub async fn get_network_info(&self) -> RpcResult<NetworkInfo> {
        let payload = self.rpc_client.call_empty("get_network_info").await?;
        from_payload(payload, "get_network_info")
    }

    /// Timestamp of the block at `height`.
    pub async fn get_timestamp_for_height(&self, height: u32) -> RpcResult<u64> {
        let mut payload = self
            .rpc_client
            .call(
                "get_timestamp_for_height",
                params(json!({"height": height})),
            )
            .await?;
        expect_typed(&mut payload, "get_timestamp_for_height", "timestamp")
    }

    /// Submits a signed spend bundle through the wallet's peers.
    ///
    /// On timeout or cancellation the bundle may still reach the mempool;
    /// resubmitting is the caller's decision.
    pub async fn push_tx(&self, spend_bundle: Value) -> RpcResult<Map<String, Value>> {
        self.rpc_client
            .call("push_tx", params(json!({"spend_bundle": spend_bundle})))
            .await
    }

    /// Submits a batch of wallet transactions. Same unknown-outcome caveat
    /// as [`WalletNodeApi::push_tx`].
    pub async fn push_transactions(&self, transactions: Vec<Value>) -> RpcResult<Map<String, Value>> {
        self.rpc_client
            .call(
                "push_transactions",
                params(json!({"transactions": transactions})),
            )
            .await
    }

    /// Marks the wallet database for a resync on next startup.
    pub async fn set_wallet_resync_on_startup(&self, enable: bool) -> RpcResult<Map<String, Value>> {
        self.rpc_client
            .call(
                "set_wallet_resync_on_startup",
                params(json!({"enable": enable})),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::{Client, Url};

    fn api(server_url: &str) -> WalletNodeApi {
        let base = Url::parse(&format!("{server_url}/")).expect("server url");
        WalletNodeApi::new(Arc::new(RpcClient::with_client(Client::new(), base)))
    }

    #[tokio::test]
    async fn sync_status_reads_top_level_fields() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/get_sync_status")
            .with_status(200)
            .with_body(
                r#"{"success": true, "synced": true, "syncing": false, "genesis_initialized": true}"#,
            )
            .create();

        let status = api(&server.url()).get_sync_status().await.expect("status");
        assert!(status.synced);
        assert!(!status.syncing);
    }

    #[tokio::test]
    async fn get_height_info_extracts_the_height() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/get_height_info")
            .with_status(200)
            .with_body(r#"{"success": true, "height": 4002117}"#)
            .create();

        let height = api(&server.url()).get_height_info().await.expect("height");
        assert_eq!(height, 4_002_117);
    }
}
