// Copyright (C) 2023-2025 The Chia-RS Project.
//
// shared_api.rs file belongs to the chia-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::models::ConnectionInfo;
use crate::payload::{expect_typed, params};
use crate::rpc_client::RpcClient;
use crate::rpc_error::RpcResult;
use serde_json::{json, Map, Value};
use std::sync::Arc;

/// Routes every Chia service registers: connection management, health and
/// shutdown.
///
/// Point it at any service's client — the routes behave the same on all of
/// them.
pub struct SharedApi {
    rpc_client: Arc<RpcClient>,
}

impl SharedApi {
    /// Creates the shared API over an existing client.
    pub fn new(rpc_client: Arc<RpcClient>) -> Self {
        Self { rpc_client }
    }

    /// Lists the service's current peer connections.
    pub async fn get_connections(&self) -> RpcResult<Vec<ConnectionInfo>> {
        let mut payload = self.rpc_client.call_empty("get_connections").await?;
        expect_typed(&mut payload, "get_connections", "connections")
    }

    /// Asks the service to dial a peer.
    pub async fn open_connection(&self, host: &str, port: u16) -> RpcResult<Map<String, Value>> {
        self.rpc_client
            .call("open_connection", params(json!({"host": host, "port": port})))
            .await
    }

    /// Drops the connection to the given peer.
    pub async fn close_connection(&self, node_id: &str) -> RpcResult<Map<String, Value>> {
        self.rpc_client
            .call("close_connection", params(json!({"node_id": node_id})))
            .await
    }

    /// Lists the RPC routes the service exposes.
    pub async fn get_routes(&self) -> RpcResult<Vec<String>> {
        let mut payload = self.rpc_client.call_empty("get_routes").await?;
        expect_typed(&mut payload, "get_routes", "routes")
    }

    /// Liveness probe.
    pub async fn healthz(&self) -> RpcResult<Map<String, Value>> {
        self.rpc_client.call_empty("healthz").await
    }

    /// Asks the service process to shut down.
    pub async fn stop_node(&self) -> RpcResult<Map<String, Value>> {
        self.rpc_client.call_empty("stop_node").await
    }
}
