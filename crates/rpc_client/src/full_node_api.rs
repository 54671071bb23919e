// Copyright (C) 2023-2025 The Chia-RS Project.
//
// full_node_api.rs file belongs to the chia-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::models::{CoinRecord, NetworkInfo};
use crate::payload::{expect_field, expect_typed, from_payload, params};
use crate::rpc_client::RpcClient;
use crate::rpc_error::RpcResult;
use serde_json::{json, Map, Value};
use std::sync::Arc;

/// Chain, coin and mempool queries of the full node service.
///
/// Block and mempool schemas are wide and versioned by the node, so those
/// results stay raw [`Value`]s; coin lookups decode into
/// [`CoinRecord`]s.
pub struct FullNodeApi {
    rpc_client: Arc<RpcClient>,
}

impl FullNodeApi {
    /// Creates the full node API over an existing client.
    pub fn new(rpc_client: Arc<RpcClient>) -> Self {
        Self { rpc_client }
    }

    /// Current blockchain state: peak, difficulty, space estimate, sync
    /// progress.
    pub async fn get_blockchain_state(&self) -> RpcResult<Value> {
        let mut payload = self.rpc_client.call_empty("get_blockchain_state").await?;
        expect_field(&mut payload, "get_blockchain_state", "blockchain_state")
    }

    /// A full block by header hash.
    pub async fn get_block(&self, header_hash: &str) -> RpcResult<Value> {
        let mut payload = self
            .rpc_client
            .call("get_block", params(json!({"header_hash": header_hash})))
            .await?;
        expect_field(&mut payload, "get_block", "block")
    }

    /// Blocks in `[start, end)`.
    pub async fn get_blocks(
        &self,
        start: u32,
        end: u32,
        exclude_header_hash: bool,
    ) -> RpcResult<Vec<Value>> {
        let mut payload = self
            .rpc_client
            .call(
                "get_blocks",
                params(json!({
                    "start": start,
                    "end": end,
                    "exclude_header_hash": exclude_header_hash,
                })),
            )
            .await?;
        expect_typed(&mut payload, "get_blocks", "blocks")
    }

    /// A block record by header hash.
    pub async fn get_block_record(&self, header_hash: &str) -> RpcResult<Value> {
        let mut payload = self
            .rpc_client
            .call(
                "get_block_record",
                params(json!({"header_hash": header_hash})),
            )
            .await?;
        expect_field(&mut payload, "get_block_record", "block_record")
    }

    /// The block record at `height` on the main chain.
    pub async fn get_block_record_by_height(&self, height: u32) -> RpcResult<Value> {
        let mut payload = self
            .rpc_client
            .call(
                "get_block_record_by_height",
                params(json!({"height": height})),
            )
            .await?;
        expect_field(&mut payload, "get_block_record_by_height", "block_record")
    }

    /// Block records in `[start, end)`.
    pub async fn get_block_records(&self, start: u32, end: u32) -> RpcResult<Vec<Value>> {
        let mut payload = self
            .rpc_client
            .call(
                "get_block_records",
                params(json!({"start": start, "end": end})),
            )
            .await?;
        expect_typed(&mut payload, "get_block_records", "block_records")
    }

    /// Headers of unfinished blocks the node is tracking.
    pub async fn get_unfinished_block_headers(&self) -> RpcResult<Vec<Value>> {
        let mut payload = self
            .rpc_client
            .call_empty("get_unfinished_block_headers")
            .await?;
        expect_typed(&mut payload, "get_unfinished_block_headers", "headers")
    }

    /// Estimated netspace between two blocks, in bytes. Left raw: the
    /// estimate exceeds what a 64-bit integer holds.
    pub async fn get_network_space(
        &self,
        newer_block_header_hash: &str,
        older_block_header_hash: &str,
    ) -> RpcResult<Value> {
        let mut payload = self
            .rpc_client
            .call(
                "get_network_space",
                params(json!({
                    "newer_block_header_hash": newer_block_header_hash,
                    "older_block_header_hash": older_block_header_hash,
                })),
            )
            .await?;
        expect_field(&mut payload, "get_network_space", "space")
    }

    /// Coins added and removed by the block with `header_hash`.
    pub async fn get_additions_and_removals(
        &self,
        header_hash: &str,
    ) -> RpcResult<(Vec<CoinRecord>, Vec<CoinRecord>)> {
        let mut payload = self
            .rpc_client
            .call(
                "get_additions_and_removals",
                params(json!({"header_hash": header_hash})),
            )
            .await?;
        let additions = expect_typed(&mut payload, "get_additions_and_removals", "additions")?;
        let removals = expect_typed(&mut payload, "get_additions_and_removals", "removals")?;
        Ok((additions, removals))
    }

    /// Network name and address prefix the node runs on.
    pub async fn get_network_info(&self) -> RpcResult<NetworkInfo> {
        let payload = self.rpc_client.call_empty("get_network_info").await?;
        from_payload(payload, "get_network_info")
    }

    // Coin queries

    /// The coin record for one coin id.
    pub async fn get_coin_record_by_name(&self, name: &str) -> RpcResult<CoinRecord> {
        let mut payload = self
            .rpc_client
            .call("get_coin_record_by_name", params(json!({"name": name})))
            .await?;
        expect_typed(&mut payload, "get_coin_record_by_name", "coin_record")
    }

    /// Coin records for a batch of coin ids.
    pub async fn get_coin_records_by_names(
        &self,
        names: Vec<String>,
        start_height: Option<u32>,
        end_height: Option<u32>,
        include_spent_coins: bool,
    ) -> RpcResult<Vec<CoinRecord>> {
        self.coin_record_query(
            "get_coin_records_by_names",
            "names",
            json!(names),
            start_height,
            end_height,
            include_spent_coins,
        )
        .await
    }

    /// Coin records locked to one puzzle hash.
    pub async fn get_coin_records_by_puzzle_hash(
        &self,
        puzzle_hash: &str,
        start_height: Option<u32>,
        end_height: Option<u32>,
        include_spent_coins: bool,
    ) -> RpcResult<Vec<CoinRecord>> {
        self.coin_record_query(
            "get_coin_records_by_puzzle_hash",
            "puzzle_hash",
            json!(puzzle_hash),
            start_height,
            end_height,
            include_spent_coins,
        )
        .await
    }

    /// Coin records locked to any of the given puzzle hashes.
    pub async fn get_coin_records_by_puzzle_hashes(
        &self,
        puzzle_hashes: Vec<String>,
        start_height: Option<u32>,
        end_height: Option<u32>,
        include_spent_coins: bool,
    ) -> RpcResult<Vec<CoinRecord>> {
        self.coin_record_query(
            "get_coin_records_by_puzzle_hashes",
            "puzzle_hashes",
            json!(puzzle_hashes),
            start_height,
            end_height,
            include_spent_coins,
        )
        .await
    }

    /// Coin records descending from the given parent coin ids.
    pub async fn get_coin_records_by_parent_ids(
        &self,
        parent_ids: Vec<String>,
        start_height: Option<u32>,
        end_height: Option<u32>,
        include_spent_coins: bool,
    ) -> RpcResult<Vec<CoinRecord>> {
        self.coin_record_query(
            "get_coin_records_by_parent_ids",
            "parent_ids",
            json!(parent_ids),
            start_height,
            end_height,
            include_spent_coins,
        )
        .await
    }

    /// Coin records tagged with a hint.
    pub async fn get_coin_records_by_hint(
        &self,
        hint: &str,
        start_height: Option<u32>,
        end_height: Option<u32>,
        include_spent_coins: bool,
    ) -> RpcResult<Vec<CoinRecord>> {
        self.coin_record_query(
            "get_coin_records_by_hint",
            "hint",
            json!(hint),
            start_height,
            end_height,
            include_spent_coins,
        )
        .await
    }

    async fn coin_record_query(
        &self,
        method: &str,
        key: &str,
        selector: Value,
        start_height: Option<u32>,
        end_height: Option<u32>,
        include_spent_coins: bool,
    ) -> RpcResult<Vec<CoinRecord>> {
        let mut request = params(json!({"include_spent_coins": include_spent_coins}));
        request.insert(key.to_string(), selector);
        if let Some(start) = start_height {
            request.insert("start_height".to_string(), json!(start));
        }
        if let Some(end) = end_height {
            request.insert("end_height".to_string(), json!(end));
        }
        let mut payload = self.rpc_client.call(method, request).await?;
        expect_typed(&mut payload, method, "coin_records")
    }

    /// The puzzle and solution revealed when a coin was spent at `height`.
    pub async fn get_puzzle_and_solution(&self, coin_id: &str, height: u32) -> RpcResult<Value> {
        let mut payload = self
            .rpc_client
            .call(
                "get_puzzle_and_solution",
                params(json!({"coin_id": coin_id, "height": height})),
            )
            .await?;
        expect_field(&mut payload, "get_puzzle_and_solution", "coin_solution")
    }

    // Mempool

    /// Submits a signed spend bundle to the mempool and returns the
    /// inclusion status.
    ///
    /// On timeout or cancellation the bundle may still have been accepted;
    /// resubmitting is the caller's decision.
    pub async fn push_tx(&self, spend_bundle: Value) -> RpcResult<String> {
        let mut payload = self
            .rpc_client
            .call("push_tx", params(json!({"spend_bundle": spend_bundle})))
            .await?;
        expect_typed(&mut payload, "push_tx", "status")
    }

    /// Ids of every transaction currently in the mempool.
    pub async fn get_all_mempool_tx_ids(&self) -> RpcResult<Vec<String>> {
        let mut payload = self.rpc_client.call_empty("get_all_mempool_tx_ids").await?;
        expect_typed(&mut payload, "get_all_mempool_tx_ids", "tx_ids")
    }

    /// The full mempool, keyed by transaction id.
    pub async fn get_all_mempool_items(&self) -> RpcResult<Map<String, Value>> {
        let mut payload = self.rpc_client.call_empty("get_all_mempool_items").await?;
        expect_typed(&mut payload, "get_all_mempool_items", "mempool_items")
    }

    /// One mempool item by transaction id.
    pub async fn get_mempool_item_by_tx_id(&self, tx_id: &str) -> RpcResult<Value> {
        let mut payload = self
            .rpc_client
            .call(
                "get_mempool_item_by_tx_id",
                params(json!({"tx_id": tx_id})),
            )
            .await?;
        expect_field(&mut payload, "get_mempool_item_by_tx_id", "mempool_item")
    }

    /// Fee estimates for landing a spend within the given time targets
    /// (seconds).
    pub async fn get_fee_estimate(
        &self,
        target_times: Vec<u64>,
        spend_bundle: Option<Value>,
        cost: Option<u64>,
    ) -> RpcResult<Map<String, Value>> {
        let mut request = params(json!({"target_times": target_times}));
        if let Some(spend_bundle) = spend_bundle {
            request.insert("spend_bundle".to_string(), spend_bundle);
        }
        if let Some(cost) = cost {
            request.insert("cost".to_string(), json!(cost));
        }
        self.rpc_client.call("get_fee_estimate", request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::{Client, Url};

    fn api(server_url: &str) -> FullNodeApi {
        let base = Url::parse(&format!("{server_url}/")).expect("server url");
        FullNodeApi::new(Arc::new(RpcClient::with_client(Client::new(), base)))
    }

    #[tokio::test]
    async fn blockchain_state_comes_back_unchanged() {
        let state = json!({
            "peak": {"height": 4_002_117},
            "sync": {"synced": true, "sync_mode": false},
            "difficulty": 9984,
            "space": 2.3e19,
        });
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/get_blockchain_state")
            .match_body(mockito::Matcher::Json(json!({})))
            .with_status(200)
            .with_body(
                serde_json::to_string(&json!({"success": true, "blockchain_state": state}))
                    .expect("body"),
            )
            .create();

        let fetched = api(&server.url()).get_blockchain_state().await.expect("state");
        assert_eq!(fetched, state);
    }

    #[tokio::test]
    async fn push_tx_returns_the_inclusion_status() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/push_tx")
            .with_status(200)
            .with_body(r#"{"success": true, "status": "SUCCESS"}"#)
            .create();

        let status = api(&server.url())
            .push_tx(json!({"coin_spends": [], "aggregated_signature": "0xc0"}))
            .await
            .expect("status");
        assert_eq!(status, "SUCCESS");
    }

    #[tokio::test]
    async fn additions_and_removals_split_the_two_listings() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/get_additions_and_removals")
            .with_status(200)
            .with_body(
                r#"{"success": true,
                    "additions": [{"coin": {"parent_coin_info": "0x01", "puzzle_hash": "0x02", "amount": 1}}],
                    "removals": []}"#,
            )
            .create();

        let (additions, removals) = api(&server.url())
            .get_additions_and_removals("0xhead")
            .await
            .expect("records");
        assert_eq!(additions.len(), 1);
        assert!(removals.is_empty());
    }
}
