// Copyright (C) 2023-2025 The Chia-RS Project.
//
// wallet_api.rs file belongs to the chia-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::models::{Coin, TransactionRecord, WalletBalance};
use crate::payload::{expect_typed, params};
use crate::rpc_client::RpcClient;
use crate::rpc_error::RpcResult;
use serde_json::{json, Map, Value};
use std::sync::Arc;

/// Balance, address and transaction operations of the standard wallet.
pub struct WalletApi {
    rpc_client: Arc<RpcClient>,
}

impl WalletApi {
    /// Creates the wallet API over an existing client.
    pub fn new(rpc_client: Arc<RpcClient>) -> Self {
        Self { rpc_client }
    }

    /// Balance breakdown for one wallet.
    pub async fn get_wallet_balance(&self, wallet_id: u32) -> RpcResult<WalletBalance> {
        let mut payload = self
            .rpc_client
            .call("get_wallet_balance", params(json!({"wallet_id": wallet_id})))
            .await?;
        expect_typed(&mut payload, "get_wallet_balance", "wallet_balance")
    }

    /// Looks up one transaction by id.
    pub async fn get_transaction(&self, transaction_id: &str) -> RpcResult<TransactionRecord> {
        let mut payload = self
            .rpc_client
            .call(
                "get_transaction",
                params(json!({"transaction_id": transaction_id})),
            )
            .await?;
        expect_typed(&mut payload, "get_transaction", "transaction")
    }

    /// Pages through a wallet's transactions.
    pub async fn get_transactions(
        &self,
        wallet_id: u32,
        start: Option<u32>,
        end: Option<u32>,
        sort_key: Option<&str>,
        reverse: bool,
    ) -> RpcResult<Vec<TransactionRecord>> {
        let mut request = params(json!({"wallet_id": wallet_id, "reverse": reverse}));
        if let Some(start) = start {
            request.insert("start".to_string(), json!(start));
        }
        if let Some(end) = end {
            request.insert("end".to_string(), json!(end));
        }
        if let Some(sort_key) = sort_key {
            request.insert("sort_key".to_string(), json!(sort_key));
        }
        let mut payload = self.rpc_client.call("get_transactions", request).await?;
        expect_typed(&mut payload, "get_transactions", "transactions")
    }

    /// Number of transactions a wallet has recorded.
    pub async fn get_transaction_count(&self, wallet_id: u32) -> RpcResult<u32> {
        let mut payload = self
            .rpc_client
            .call(
                "get_transaction_count",
                params(json!({"wallet_id": wallet_id})),
            )
            .await?;
        expect_typed(&mut payload, "get_transaction_count", "count")
    }

    /// Memos attached to a confirmed transaction, keyed by coin id.
    pub async fn get_transaction_memo(&self, transaction_id: &str) -> RpcResult<Map<String, Value>> {
        self.rpc_client
            .call(
                "get_transaction_memo",
                params(json!({"transaction_id": transaction_id})),
            )
            .await
    }

    /// A receive address for the wallet; `new_address` advances the
    /// derivation index instead of reusing the current one.
    pub async fn get_next_address(&self, wallet_id: u32, new_address: bool) -> RpcResult<String> {
        let mut payload = self
            .rpc_client
            .call(
                "get_next_address",
                params(json!({"wallet_id": wallet_id, "new_address": new_address})),
            )
            .await?;
        expect_typed(&mut payload, "get_next_address", "address")
    }

    /// Sends `amount` mojos to `address`.
    ///
    /// If the call times out or is cancelled, the service may still have
    /// broadcast the spend — the remote outcome is unknown, and
    /// resubmitting is the caller's decision.
    pub async fn send_transaction(
        &self,
        wallet_id: u32,
        amount: u64,
        address: &str,
        fee: u64,
        memos: Option<Vec<String>>,
    ) -> RpcResult<TransactionRecord> {
        let mut request = params(json!({
            "wallet_id": wallet_id,
            "amount": amount,
            "address": address,
            "fee": fee,
        }));
        if let Some(memos) = memos {
            request.insert("memos".to_string(), json!(memos));
        }
        let mut payload = self.rpc_client.call("send_transaction", request).await?;
        expect_typed(&mut payload, "send_transaction", "transaction")
    }

    /// Sends to multiple recipients in one spend. Same unknown-outcome
    /// caveat as [`WalletApi::send_transaction`].
    pub async fn send_transaction_multi(
        &self,
        wallet_id: u32,
        additions: Vec<Value>,
        fee: u64,
        coins: Option<Vec<Value>>,
    ) -> RpcResult<Map<String, Value>> {
        let mut request = params(json!({
            "wallet_id": wallet_id,
            "additions": additions,
            "fee": fee,
        }));
        if let Some(coins) = coins {
            request.insert("coins".to_string(), json!(coins));
        }
        self.rpc_client.call("send_transaction_multi", request).await
    }

    /// Builds and signs a transaction without broadcasting it.
    pub async fn create_signed_transaction(
        &self,
        additions: Vec<Value>,
        wallet_id: Option<u32>,
        fee: u64,
        coins: Option<Vec<Value>>,
        coin_announcements: Option<Vec<Value>>,
        puzzle_announcements: Option<Vec<Value>>,
    ) -> RpcResult<Map<String, Value>> {
        let mut request = params(json!({"additions": additions, "fee": fee}));
        if let Some(wallet_id) = wallet_id {
            request.insert("wallet_id".to_string(), json!(wallet_id));
        }
        if let Some(coins) = coins {
            request.insert("coins".to_string(), json!(coins));
        }
        if let Some(announcements) = coin_announcements {
            request.insert("coin_announcements".to_string(), json!(announcements));
        }
        if let Some(announcements) = puzzle_announcements {
            request.insert("puzzle_announcements".to_string(), json!(announcements));
        }
        self.rpc_client.call("create_signed_transaction", request).await
    }

    /// Drops all unconfirmed transactions of a wallet from the local store.
    pub async fn delete_unconfirmed_transactions(
        &self,
        wallet_id: u32,
    ) -> RpcResult<Map<String, Value>> {
        self.rpc_client
            .call(
                "delete_unconfirmed_transactions",
                params(json!({"wallet_id": wallet_id})),
            )
            .await
    }

    /// Spendable coins of a wallet, with optional size and exclusion
    /// filters.
    pub async fn get_spendable_coins(
        &self,
        wallet_id: u32,
        min_coin_amount: Option<u64>,
        max_coin_amount: Option<u64>,
        excluded_coin_ids: Option<Vec<String>>,
    ) -> RpcResult<Map<String, Value>> {
        let mut request = params(json!({"wallet_id": wallet_id}));
        if let Some(min) = min_coin_amount {
            request.insert("min_coin_amount".to_string(), json!(min));
        }
        if let Some(max) = max_coin_amount {
            request.insert("max_coin_amount".to_string(), json!(max));
        }
        if let Some(ids) = excluded_coin_ids {
            request.insert("excluded_coin_ids".to_string(), json!(ids));
        }
        self.rpc_client.call("get_spendable_coins", request).await
    }

    /// Asks the wallet to pick coins covering `amount`.
    pub async fn select_coins(
        &self,
        wallet_id: u32,
        amount: u64,
        min_coin_amount: Option<u64>,
        max_coin_amount: Option<u64>,
    ) -> RpcResult<Vec<Coin>> {
        let mut request = params(json!({"wallet_id": wallet_id, "amount": amount}));
        if let Some(min) = min_coin_amount {
            request.insert("min_coin_amount".to_string(), json!(min));
        }
        if let Some(max) = max_coin_amount {
            request.insert("max_coin_amount".to_string(), json!(max));
        }
        let mut payload = self.rpc_client.call("select_coins", request).await?;
        expect_typed(&mut payload, "select_coins", "coins")
    }

    /// The highest derivation index the wallet has handed out.
    pub async fn get_current_derivation_index(&self) -> RpcResult<u32> {
        let mut payload = self
            .rpc_client
            .call_empty("get_current_derivation_index")
            .await?;
        expect_typed(&mut payload, "get_current_derivation_index", "index")
    }

    /// Pre-derives addresses up to `index`.
    pub async fn extend_derivation_index(&self, index: u32) -> RpcResult<Map<String, Value>> {
        self.rpc_client
            .call("extend_derivation_index", params(json!({"index": index})))
            .await
    }

    /// Lifetime farming totals of the logged-in key.
    pub async fn get_farmed_amount(&self) -> RpcResult<Map<String, Value>> {
        self.rpc_client.call_empty("get_farmed_amount").await
    }
}
