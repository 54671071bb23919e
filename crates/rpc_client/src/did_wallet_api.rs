// Copyright (C) 2023-2025 The Chia-RS Project.
//
// did_wallet_api.rs file belongs to the chia-rs project and is free
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

/// DID (decentralized identity) wallet operations.
pub struct DidWalletApi {
    rpc_client: Arc<RpcClient>,
}

impl DidWalletApi {
    /// Creates the DID wallet API over an existing client.
    pub fn new(rpc_client: Arc<RpcClient>) -> Self {
        Self { rpc_client }
    }

    /// Produces an attestation helping another DID recover.
    pub async fn did_create_attest(
        &self,
        wallet_id: u32,
        coin_name: &str,
        pubkey: &str,
        puzhash: &str,
    ) -> RpcResult<Map<String, Value>> {
        self.rpc_client
            .call(
                "did_create_attest",
                params(json!({
                    "wallet_id": wallet_id,
                    "coin_name": coin_name,
                    "pubkey": pubkey,
                    "puzhash": puzhash,
                })),
            )
            .await
    }

    /// Serializes the DID into a recovery backup blob.
    pub async fn did_create_backup_file(&self, wallet_id: u32) -> RpcResult<Map<String, Value>> {
        self.rpc_client
            .call("did_create_backup_file", params(json!({"wallet_id": wallet_id})))
            .await
    }

    /// Re-attaches a DID the wallet lost track of.
    pub async fn did_find_lost_did(&self, coin_id: &str) -> RpcResult<Map<String, Value>> {
        self.rpc_client
            .call("did_find_lost_did", params(json!({"coin_id": coin_id})))
            .await
    }

    /// The DID's current coin and its lineage.
    pub async fn did_get_current_coin_info(&self, wallet_id: u32) -> RpcResult<Map<String, Value>> {
        self.rpc_client
            .call(
                "did_get_current_coin_info",
                params(json!({"wallet_id": wallet_id})),
            )
            .await
    }

    /// The DID identifier of a wallet.
    pub async fn did_get_did(&self, wallet_id: u32) -> RpcResult<Map<String, Value>> {
        self.rpc_client
            .call("did_get_did", params(json!({"wallet_id": wallet_id})))
            .await
    }

    /// Resolves a DID from an on-chain coin id.
    pub async fn did_get_info(&self, coin_id: &str, latest: bool) -> RpcResult<Map<String, Value>> {
        self.rpc_client
            .call(
                "did_get_info",
                params(json!({"coin_id": coin_id, "latest": latest})),
            )
            .await
    }

    /// What a recovering DID needs from its helpers.
    pub async fn did_get_information_needed_for_recovery(
        &self,
        wallet_id: u32,
    ) -> RpcResult<Map<String, Value>> {
        self.rpc_client
            .call(
                "did_get_information_needed_for_recovery",
                params(json!({"wallet_id": wallet_id})),
            )
            .await
    }

    /// The DID's stored metadata.
    pub async fn did_get_metadata(&self, wallet_id: u32) -> RpcResult<Map<String, Value>> {
        self.rpc_client
            .call("did_get_metadata", params(json!({"wallet_id": wallet_id})))
            .await
    }

    /// The public key of the DID wallet.
    pub async fn did_get_pubkey(&self, wallet_id: u32) -> RpcResult<Map<String, Value>> {
        self.rpc_client
            .call("did_get_pubkey", params(json!({"wallet_id": wallet_id})))
            .await
    }

    /// The DID's recovery helper list.
    pub async fn did_get_recovery_list(&self, wallet_id: u32) -> RpcResult<Map<String, Value>> {
        self.rpc_client
            .call("did_get_recovery_list", params(json!({"wallet_id": wallet_id})))
            .await
    }

    /// The display name of a DID wallet.
    pub async fn did_get_wallet_name(&self, wallet_id: u32) -> RpcResult<Map<String, Value>> {
        self.rpc_client
            .call("did_get_wallet_name", params(json!({"wallet_id": wallet_id})))
            .await
    }

    /// Spends the DID coin carrying announcements only.
    pub async fn did_message_spend(
        &self,
        wallet_id: u32,
        coin_announcements: Vec<String>,
        puzzle_announcements: Vec<String>,
    ) -> RpcResult<Map<String, Value>> {
        self.rpc_client
            .call(
                "did_message_spend",
                params(json!({
                    "wallet_id": wallet_id,
                    "coin_announcements": coin_announcements,
                    "puzzle_announcements": puzzle_announcements,
                })),
            )
            .await
    }

    /// Completes a recovery using collected attestations.
    pub async fn did_recovery_spend(
        &self,
        wallet_id: u32,
        attest_data: Vec<String>,
        pubkey: Option<&str>,
        puzhash: Option<&str>,
    ) -> RpcResult<Map<String, Value>> {
        let mut request = params(json!({
            "wallet_id": wallet_id,
            "attest_data": attest_data,
        }));
        if let Some(pubkey) = pubkey {
            request.insert("pubkey".to_string(), json!(pubkey));
        }
        if let Some(puzhash) = puzhash {
            request.insert("puzhash".to_string(), json!(puzhash));
        }
        self.rpc_client.call("did_recovery_spend", request).await
    }

    /// Renames a DID wallet.
    pub async fn did_set_wallet_name(&self, wallet_id: u32, name: &str) -> RpcResult<Map<String, Value>> {
        self.rpc_client
            .call(
                "did_set_wallet_name",
                params(json!({"wallet_id": wallet_id, "name": name})),
            )
            .await
    }

    /// Transfers the DID to another address. Timeout/cancellation leaves
    /// the remote outcome unknown; resubmitting is the caller's decision.
    pub async fn did_transfer_did(
        &self,
        wallet_id: u32,
        inner_address: &str,
        fee: u64,
        with_recovery_info: bool,
    ) -> RpcResult<Map<String, Value>> {
        self.rpc_client
            .call(
                "did_transfer_did",
                params(json!({
                    "wallet_id": wallet_id,
                    "inner_address": inner_address,
                    "fee": fee,
                    "with_recovery_info": with_recovery_info,
                })),
            )
            .await
    }

    /// Replaces the DID's metadata.
    pub async fn did_update_metadata(
        &self,
        wallet_id: u32,
        metadata: Value,
    ) -> RpcResult<Map<String, Value>> {
        self.rpc_client
            .call(
                "did_update_metadata",
                params(json!({"wallet_id": wallet_id, "metadata": metadata})),
            )
            .await
    }

    /// Replaces the recovery helper list.
    pub async fn did_update_recovery_ids(
        &self,
        wallet_id: u32,
        new_list: Vec<String>,
        num_verifications_required: Option<u32>,
    ) -> RpcResult<Map<String, Value>> {
        let mut request = params(json!({
            "wallet_id": wallet_id,
            "new_list": new_list,
        }));
        if let Some(required) = num_verifications_required {
            request.insert("num_verifications_required".to_string(), json!(required));
        }
        self.rpc_client.call("did_update_recovery_ids", request).await
    }
}
