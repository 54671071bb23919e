// Copyright (C) 2023-2025 The Chia-RS Project.
//
// nft_wallet_api.rs file belongs to the chia-rs project and is free
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

/// NFT wallet operations.
pub struct NftWalletApi {
    rpc_client: Arc<RpcClient>,
}

impl NftWalletApi {
    /// Creates the NFT wallet API over an existing client.
    pub fn new(rpc_client: Arc<RpcClient>) -> Self {
        Self { rpc_client }
    }

    /// Adds a URI (data, metadata or license) to an owned NFT.
    pub async fn nft_add_uri(
        &self,
        wallet_id: u32,
        nft_coin_id: &str,
        key: &str,
        uri: &str,
        fee: u64,
    ) -> RpcResult<Map<String, Value>> {
        self.rpc_client
            .call(
                "nft_add_uri",
                params(json!({
                    "wallet_id": wallet_id,
                    "nft_coin_id": nft_coin_id,
                    "key": key,
                    "uri": uri,
                    "fee": fee,
                })),
            )
            .await
    }

    /// Mints an NFT with the given content hash and URIs.
    pub async fn nft_mint_nft(
        &self,
        wallet_id: u32,
        royalty_address: &str,
        target_address: &str,
        hash: &str,
        uris: Vec<String>,
        fee: u64,
    ) -> RpcResult<Map<String, Value>> {
        self.rpc_client
            .call(
                "nft_mint_nft",
                params(json!({
                    "wallet_id": wallet_id,
                    "royalty_address": royalty_address,
                    "target_address": target_address,
                    "hash": hash,
                    "uris": uris,
                    "fee": fee,
                })),
            )
            .await
    }

    /// Pages through the NFTs of a wallet.
    pub async fn nft_get_nfts(
        &self,
        wallet_id: u32,
        start_index: Option<u32>,
        num: Option<u32>,
    ) -> RpcResult<Map<String, Value>> {
        let mut request = params(json!({"wallet_id": wallet_id}));
        if let Some(start_index) = start_index {
            request.insert("start_index".to_string(), json!(start_index));
        }
        if let Some(num) = num {
            request.insert("num".to_string(), json!(num));
        }
        self.rpc_client.call("nft_get_nfts", request).await
    }

    /// Resolves an NFT from its launcher or coin id.
    pub async fn nft_get_info(&self, coin_id: &str) -> RpcResult<Map<String, Value>> {
        self.rpc_client
            .call("nft_get_info", params(json!({"coin_id": coin_id})))
            .await
    }

    /// Transfers an NFT. Timeout/cancellation leaves the remote outcome
    /// unknown; resubmitting is the caller's decision.
    pub async fn nft_transfer_nft(
        &self,
        wallet_id: u32,
        target_address: &str,
        nft_coin_id: &str,
        fee: u64,
    ) -> RpcResult<Map<String, Value>> {
        self.rpc_client
            .call(
                "nft_transfer_nft",
                params(json!({
                    "wallet_id": wallet_id,
                    "target_address": target_address,
                    "nft_coin_id": nft_coin_id,
                    "fee": fee,
                })),
            )
            .await
    }

    /// Binds an NFT to a DID.
    pub async fn nft_set_nft_did(
        &self,
        wallet_id: u32,
        did_id: &str,
        nft_coin_id: &str,
        fee: u64,
    ) -> RpcResult<Map<String, Value>> {
        self.rpc_client
            .call(
                "nft_set_nft_did",
                params(json!({
                    "wallet_id": wallet_id,
                    "did_id": did_id,
                    "nft_coin_id": nft_coin_id,
                    "fee": fee,
                })),
            )
            .await
    }

    /// The NFT wallet bound to a DID, if any.
    pub async fn nft_get_by_did(&self, did_id: Option<&str>) -> RpcResult<Map<String, Value>> {
        let mut request = Map::new();
        if let Some(did_id) = did_id {
            request.insert("did_id".to_string(), json!(did_id));
        }
        self.rpc_client.call("nft_get_by_did", request).await
    }
}
