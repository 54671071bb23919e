// Copyright (C) 2023-2025 The Chia-RS Project.
//
// farmer_api.rs file belongs to the chia-rs project and is free
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

/// Farming state: signage points, reward targets and attached harvesters.
pub struct FarmerApi {
    rpc_client: Arc<RpcClient>,
}

impl FarmerApi {
    /// Creates the farmer API over an existing client.
    pub fn new(rpc_client: Arc<RpcClient>) -> Self {
        Self { rpc_client }
    }

    /// One tracked signage point by its hash, with the proofs received for
    /// it.
    pub async fn get_signage_point(&self, sp_hash: &str) -> RpcResult<Map<String, Value>> {
        self.rpc_client
            .call("get_signage_point", params(json!({"sp_hash": sp_hash})))
            .await
    }

    /// All signage points the farmer is tracking.
    pub async fn get_signage_points(&self) -> RpcResult<Vec<Value>> {
        let mut payload = self.rpc_client.call_empty("get_signage_points").await?;
        expect_typed(&mut payload, "get_signage_points", "signage_points")
    }

    /// The configured farmer and pool reward addresses.
    pub async fn get_reward_targets(
        &self,
        search_for_private_key: bool,
    ) -> RpcResult<Map<String, Value>> {
        self.rpc_client
            .call(
                "get_reward_targets",
                params(json!({"search_for_private_key": search_for_private_key})),
            )
            .await
    }

    /// Updates the reward addresses; either may be left unchanged.
    pub async fn set_reward_targets(
        &self,
        farmer_target: Option<&str>,
        pool_target: Option<&str>,
    ) -> RpcResult<Map<String, Value>> {
        let mut request = Map::new();
        if let Some(target) = farmer_target {
            request.insert("farmer_target".to_string(), json!(target));
        }
        if let Some(target) = pool_target {
            request.insert("pool_target".to_string(), json!(target));
        }
        self.rpc_client.call("set_reward_targets", request).await
    }

    /// Harvesters attached to this farmer and their plot summaries.
    pub async fn get_harvesters(&self) -> RpcResult<Map<String, Value>> {
        self.rpc_client.call_empty("get_harvesters").await
    }

    /// Per-pool membership state of the farmer.
    pub async fn get_pool_state(&self) -> RpcResult<Vec<Value>> {
        let mut payload = self.rpc_client.call_empty("get_pool_state").await?;
        expect_typed(&mut payload, "get_pool_state", "pool_state")
    }

    /// An authenticated login link for the pool the launcher belongs to.
    pub async fn get_pool_login_link(&self, launcher_id: &str) -> RpcResult<String> {
        let mut payload = self
            .rpc_client
            .call(
                "get_pool_login_link",
                params(json!({"launcher_id": launcher_id})),
            )
            .await?;
        expect_typed(&mut payload, "get_pool_login_link", "login_link")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::{Client, Url};

    fn api(server_url: &str) -> FarmerApi {
        let base = Url::parse(&format!("{server_url}/")).expect("server url");
        FarmerApi::new(Arc::new(RpcClient::with_client(Client::new(), base)))
    }

    #[tokio::test]
    async fn set_reward_targets_only_sends_what_changes() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/set_reward_targets")
            .match_body(mockito::Matcher::Json(json!({"farmer_target": "xch1farm"})))
            .with_status(200)
            .with_body(r#"{"success": true}"#)
            .create();

        api(&server.url())
            .set_reward_targets(Some("xch1farm"), None)
            .await
            .expect("payload");
    }

    #[tokio::test]
    async fn pool_state_is_extracted_as_a_list() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/get_pool_state")
            .with_status(200)
            .with_body(
                r#"{"success": true, "pool_state": [{"pool_config": {"pool_url": "https://pool.example"}}]}"#,
            )
            .create();

        let state = api(&server.url()).get_pool_state().await.expect("state");
        assert_eq!(state.len(), 1);
    }
}
