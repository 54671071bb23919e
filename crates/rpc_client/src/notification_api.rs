// Copyright (C) 2023-2025 The Chia-RS Project.
//
// notification_api.rs file belongs to the chia-rs project and is free
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

/// On-chain notifications and message signing.
pub struct NotificationApi {
    rpc_client: Arc<RpcClient>,
}

impl NotificationApi {
    /// Creates the notification API over an existing client.
    pub fn new(rpc_client: Arc<RpcClient>) -> Self {
        Self { rpc_client }
    }

    /// Notifications received by the wallet, optionally filtered by id or
    /// paged.
    pub async fn get_notifications(
        &self,
        ids: Option<Vec<String>>,
        start: Option<u32>,
        end: Option<u32>,
    ) -> RpcResult<Map<String, Value>> {
        let mut request = Map::new();
        if let Some(ids) = ids {
            request.insert("ids".to_string(), json!(ids));
        }
        if let Some(start) = start {
            request.insert("start".to_string(), json!(start));
        }
        if let Some(end) = end {
            request.insert("end".to_string(), json!(end));
        }
        self.rpc_client.call("get_notifications", request).await
    }

    /// Deletes notifications; all of them when `ids` is `None`.
    pub async fn delete_notifications(&self, ids: Option<Vec<String>>) -> RpcResult<Map<String, Value>> {
        let mut request = Map::new();
        if let Some(ids) = ids {
            request.insert("ids".to_string(), json!(ids));
        }
        self.rpc_client.call("delete_notifications", request).await
    }

    /// Sends an on-chain notification coin of `amount` mojos to `target`.
    pub async fn send_notification(
        &self,
        target: &str,
        message: &str,
        amount: u64,
        fee: u64,
    ) -> RpcResult<Map<String, Value>> {
        self.rpc_client
            .call(
                "send_notification",
                params(json!({
                    "target": target,
                    "message": message,
                    "amount": amount,
                    "fee": fee,
                })),
            )
            .await
    }

    /// Signs a message with the key behind an owned address.
    pub async fn sign_message_by_address(
        &self,
        address: &str,
        message: &str,
    ) -> RpcResult<Map<String, Value>> {
        self.rpc_client
            .call(
                "sign_message_by_address",
                params(json!({"address": address, "message": message})),
            )
            .await
    }

    /// Signs a message with the key behind a DID or NFT id.
    pub async fn sign_message_by_id(&self, id: &str, message: &str) -> RpcResult<Map<String, Value>> {
        self.rpc_client
            .call(
                "sign_message_by_id",
                params(json!({"id": id, "message": message})),
            )
            .await
    }
}
