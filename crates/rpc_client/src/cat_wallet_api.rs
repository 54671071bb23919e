// Copyright (C) 2023-2025 The Chia-RS Project.
//
// cat_wallet_api.rs file belongs to the chia-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::payload::{expect_typed, params};
use crate::rpc_client::RpcClient;
use crate::rpc_error::{RpcError, RpcResult};
use serde::Serialize;
use serde_json::{json, Map, Value};
use std::sync::Arc;

/// A CAT spend, serialized field-for-field into the request body.
///
/// Only `wallet_id`, `amount`, `inner_address` and `fee` are required;
/// everything optional is skipped when unset so the service applies its
/// own defaults.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CatSpend {
    pub wallet_id: u32,
    /// Amount in the CAT's smallest unit.
    pub amount: u64,
    /// Receiving address.
    pub inner_address: String,
    /// Fee in mojos.
    pub fee: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memos: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coins: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_coin_amount: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_coin_amount: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_coin_amounts: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_coin_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reuse_puzhash: Option<bool>,
}

/// CAT (Chia Asset Token) wallet operations, including the offer surface.
pub struct CatWalletApi {
    rpc_client: Arc<RpcClient>,
}

impl CatWalletApi {
    /// Creates the CAT wallet API over an existing client.
    pub fn new(rpc_client: Arc<RpcClient>) -> Self {
        Self { rpc_client }
    }

    /// Resolves an asset id to its registered name.
    pub async fn cat_asset_id_to_name(&self, asset_id: &str) -> RpcResult<Map<String, Value>> {
        self.rpc_client
            .call("cat_asset_id_to_name", params(json!({"asset_id": asset_id})))
            .await
    }

    /// The asset id backing a CAT wallet.
    pub async fn cat_get_asset_id(&self, wallet_id: u32) -> RpcResult<String> {
        let mut payload = self
            .rpc_client
            .call("cat_get_asset_id", params(json!({"wallet_id": wallet_id})))
            .await?;
        expect_typed(&mut payload, "cat_get_asset_id", "asset_id")
    }

    /// The display name of a CAT wallet.
    pub async fn cat_get_name(&self, wallet_id: u32) -> RpcResult<String> {
        let mut payload = self
            .rpc_client
            .call("cat_get_name", params(json!({"wallet_id": wallet_id})))
            .await?;
        expect_typed(&mut payload, "cat_get_name", "name")
    }

    /// Renames a CAT wallet.
    pub async fn cat_set_name(&self, wallet_id: u32, name: &str) -> RpcResult<Map<String, Value>> {
        self.rpc_client
            .call(
                "cat_set_name",
                params(json!({"wallet_id": wallet_id, "name": name})),
            )
            .await
    }

    /// Spends from a CAT wallet. Timeout/cancellation leaves the remote
    /// outcome unknown; resubmitting is the caller's decision.
    pub async fn cat_spend(&self, spend: CatSpend) -> RpcResult<Map<String, Value>> {
        let request = serde_json::to_value(&spend)
            .map_err(|err| RpcError::config(format!("cat_spend: unserializable request: {err}")))?;
        self.rpc_client.call("cat_spend", params(request)).await
    }

    /// CATs the wallet received without a matching wallet.
    pub async fn get_stray_cats(&self) -> RpcResult<Map<String, Value>> {
        self.rpc_client.call_empty("get_stray_cats").await
    }

    // Offers

    /// Creates an offer file from a wallet-id to amount mapping (negative
    /// amounts offered, positive requested).
    pub async fn create_offer_for_ids(
        &self,
        offer: Map<String, Value>,
        fee: u64,
        validate_only: bool,
        driver_dict: Option<Value>,
    ) -> RpcResult<Map<String, Value>> {
        let mut request = params(json!({
            "offer": offer,
            "fee": fee,
            "validate_only": validate_only,
        }));
        if let Some(driver_dict) = driver_dict {
            request.insert("driver_dict".to_string(), driver_dict);
        }
        self.rpc_client.call("create_offer_for_ids", request).await
    }

    /// Looks up one offer by trade id.
    pub async fn get_offer(&self, trade_id: &str, file_contents: bool) -> RpcResult<Map<String, Value>> {
        self.rpc_client
            .call(
                "get_offer",
                params(json!({"trade_id": trade_id, "file_contents": file_contents})),
            )
            .await
    }

    /// Pages through the wallet's offers.
    pub async fn get_all_offers(
        &self,
        start: u32,
        end: u32,
        include_completed: bool,
        sort_key: Option<&str>,
        reverse: bool,
        file_contents: bool,
    ) -> RpcResult<Map<String, Value>> {
        let mut request = params(json!({
            "start": start,
            "end": end,
            "include_completed": include_completed,
            "reverse": reverse,
            "file_contents": file_contents,
        }));
        if let Some(sort_key) = sort_key {
            request.insert("sort_key".to_string(), json!(sort_key));
        }
        self.rpc_client.call("get_all_offers", request).await
    }

    /// Counts the wallet's offers by state.
    pub async fn get_offers_count(&self) -> RpcResult<Map<String, Value>> {
        self.rpc_client.call_empty("get_offers_count").await
    }

    /// Summarizes an offer file without taking it.
    pub async fn get_offer_summary(&self, offer: &str, advanced: bool) -> RpcResult<Map<String, Value>> {
        self.rpc_client
            .call(
                "get_offer_summary",
                params(json!({"offer": offer, "advanced": advanced})),
            )
            .await
    }

    /// Checks whether an offer file can still be taken.
    pub async fn check_offer_validity(&self, offer: &str) -> RpcResult<Map<String, Value>> {
        self.rpc_client
            .call("check_offer_validity", params(json!({"offer": offer})))
            .await
    }

    /// Takes an offer. Timeout/cancellation leaves the remote outcome
    /// unknown; resubmitting is the caller's decision.
    pub async fn take_offer(&self, offer: &str, fee: u64) -> RpcResult<Map<String, Value>> {
        self.rpc_client
            .call("take_offer", params(json!({"offer": offer, "fee": fee})))
            .await
    }

    /// Cancels one offer by trade id. `secure` cancels on-chain; otherwise
    /// the offer is only dropped locally.
    pub async fn cancel_offer(
        &self,
        trade_id: &str,
        fee: u64,
        secure: bool,
    ) -> RpcResult<Map<String, Value>> {
        self.rpc_client
            .call(
                "cancel_offer",
                params(json!({"trade_id": trade_id, "fee": fee, "secure": secure})),
            )
            .await
    }

    /// Cancels offers in batches, optionally only those for one asset.
    pub async fn cancel_offers(
        &self,
        batch_fee: u64,
        secure: bool,
        batch_size: u32,
        cancel_all: bool,
        asset_id: &str,
    ) -> RpcResult<Map<String, Value>> {
        self.rpc_client
            .call(
                "cancel_offers",
                params(json!({
                    "batch_fee": batch_fee,
                    "secure": secure,
                    "batch_size": batch_size,
                    "cancel_all": cancel_all,
                    "asset_id": asset_id.to_lowercase(),
                })),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::{Client, Url};

    fn api(server_url: &str) -> CatWalletApi {
        let base = Url::parse(&format!("{server_url}/")).expect("server url");
        CatWalletApi::new(Arc::new(RpcClient::with_client(Client::new(), base)))
    }

    #[tokio::test]
    async fn cat_spend_skips_unset_options() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/cat_spend")
            .match_body(mockito::Matcher::Json(json!({
                "wallet_id": 2,
                "amount": 100,
                "inner_address": "xch1cat",
                "fee": 10,
            })))
            .with_status(200)
            .with_body(r#"{"success": true, "transaction_id": "0x77"}"#)
            .create();

        let payload = api(&server.url())
            .cat_spend(CatSpend {
                wallet_id: 2,
                amount: 100,
                inner_address: "xch1cat".to_string(),
                fee: 10,
                ..CatSpend::default()
            })
            .await
            .expect("payload");
        assert_eq!(payload.get("transaction_id"), Some(&json!("0x77")));
    }

    #[tokio::test]
    async fn cancel_offers_lowercases_the_asset_id() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/cancel_offers")
            .match_body(mockito::Matcher::Json(json!({
                "batch_fee": 0,
                "secure": true,
                "batch_size": 5,
                "cancel_all": false,
                "asset_id": "xch",
            })))
            .with_status(200)
            .with_body(r#"{"success": true}"#)
            .create();

        api(&server.url())
            .cancel_offers(0, true, 5, false, "XCH")
            .await
            .expect("payload");
    }
}
