// Copyright (C) 2023-2025 The Chia-RS Project.
//
// pool_wallet_api.rs file belongs to the chia-rs project and is free
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

/// Pooling (plotNFT) wallet operations.
pub struct PoolWalletApi {
    rpc_client: Arc<RpcClient>,
}

impl PoolWalletApi {
    /// Creates the pool wallet API over an existing client.
    pub fn new(rpc_client: Arc<RpcClient>) -> Self {
        Self { rpc_client }
    }

    /// Claims pending pool rewards into the wallet.
    pub async fn pw_absorb_rewards(
        &self,
        wallet_id: u32,
        fee: u64,
        max_spends_in_tx: Option<u32>,
    ) -> RpcResult<Map<String, Value>> {
        let mut request = params(json!({"wallet_id": wallet_id, "fee": fee}));
        if let Some(max) = max_spends_in_tx {
            request.insert("max_spends_in_tx".to_string(), json!(max));
        }
        self.rpc_client.call("pw_absorb_rewards", request).await
    }

    /// Joins a pool. The state change takes `relative_lock_height` blocks
    /// to become effective.
    pub async fn pw_join_pool(
        &self,
        wallet_id: u32,
        target_puzzlehash: &str,
        pool_url: &str,
        relative_lock_height: u32,
        fee: u64,
    ) -> RpcResult<Map<String, Value>> {
        self.rpc_client
            .call(
                "pw_join_pool",
                params(json!({
                    "wallet_id": wallet_id,
                    "target_puzzlehash": target_puzzlehash,
                    "pool_url": pool_url,
                    "relative_lock_height": relative_lock_height,
                    "fee": fee,
                })),
            )
            .await
    }

    /// Leaves the current pool and farms to the own key.
    pub async fn pw_self_pool(&self, wallet_id: u32, fee: u64) -> RpcResult<Map<String, Value>> {
        self.rpc_client
            .call(
                "pw_self_pool",
                params(json!({"wallet_id": wallet_id, "fee": fee})),
            )
            .await
    }

    /// Current and target pooling state of a plotNFT wallet.
    pub async fn pw_status(&self, wallet_id: u32) -> RpcResult<Map<String, Value>> {
        self.rpc_client
            .call("pw_status", params(json!({"wallet_id": wallet_id})))
            .await
    }
}
