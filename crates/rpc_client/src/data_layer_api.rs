// Copyright (C) 2023-2025 The Chia-RS Project.
//
// data_layer_api.rs file belongs to the chia-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::payload::params;
use crate::rpc_client::RpcClient;
use crate::rpc_error::RpcResult;
use serde_json::{json, Map, Value};
use std::sync::Arc;

/// Data-layer singleton operations on the wallet service.
pub struct DataLayerApi {
    rpc_client: Arc<RpcClient>,
}

impl DataLayerApi {
    /// Creates the data layer API over an existing client.
    pub fn new(rpc_client: Arc<RpcClient>) -> Self {
        Self { rpc_client }
    }

    /// Launches a new data-layer singleton with the given merkle root.
    pub async fn create_new_dl(&self, root: &str, fee: u64) -> RpcResult<Map<String, Value>> {
        self.rpc_client
            .call("create_new_dl", params(json!({"root": root, "fee": fee})))
            .await
    }

    /// Latest singleton state for a launcher, optionally only confirmed.
    pub async fn dl_latest_singleton(
        &self,
        launcher_id: &str,
        only_confirmed: bool,
    ) -> RpcResult<Map<String, Value>> {
        self.rpc_client
            .call(
                "dl_latest_singleton",
                params(json!({"launcher_id": launcher_id, "only_confirmed": only_confirmed})),
            )
            .await
    }

    /// Root-hash history of a singleton.
    pub async fn dl_history(
        &self,
        launcher_id: &str,
        min_generation: Option<u32>,
        max_generation: Option<u32>,
        num_results: Option<u32>,
    ) -> RpcResult<Map<String, Value>> {
        let mut request = params(json!({"launcher_id": launcher_id}));
        if let Some(min) = min_generation {
            request.insert("min_generation".to_string(), json!(min));
        }
        if let Some(max) = max_generation {
            request.insert("max_generation".to_string(), json!(max));
        }
        if let Some(num) = num_results {
            request.insert("num_results".to_string(), json!(num));
        }
        self.rpc_client.call("dl_history", request).await
    }

    /// Mirrors announcing a singleton.
    pub async fn dl_get_mirrors(&self, launcher_id: &str) -> RpcResult<Map<String, Value>> {
        self.rpc_client
            .call("dl_get_mirrors", params(json!({"launcher_id": launcher_id})))
            .await
    }

    /// Spends a mirror coin back into the wallet.
    pub async fn dl_delete_mirror(&self, coin_id: &str, fee: u64) -> RpcResult<Map<String, Value>> {
        self.rpc_client
            .call(
                "dl_delete_mirror",
                params(json!({"coin_id": coin_id, "fee": fee})),
            )
            .await
    }

    /// Starts following another owner's singleton.
    pub async fn dl_track_new(&self, launcher_id: &str) -> RpcResult<Map<String, Value>> {
        self.rpc_client
            .call("dl_track_new", params(json!({"launcher_id": launcher_id})))
            .await
    }

    /// Stops following a singleton.
    pub async fn dl_stop_tracking(&self, launcher_id: &str) -> RpcResult<Map<String, Value>> {
        self.rpc_client
            .call("dl_stop_tracking", params(json!({"launcher_id": launcher_id})))
            .await
    }
}
