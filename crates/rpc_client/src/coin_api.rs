// Copyright (C) 2023-2025 The Chia-RS Project.
//
// coin_api.rs file belongs to the chia-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::models::CoinRecord;
use crate::payload::{expect_typed, params};
use crate::rpc_client::RpcClient;
use crate::rpc_error::RpcResult;
use serde_json::json;
use std::sync::Arc;

/// Coin lookups on the wallet service.
pub struct CoinApi {
    rpc_client: Arc<RpcClient>,
}

impl CoinApi {
    /// Creates the coin API over an existing client.
    pub fn new(rpc_client: Arc<RpcClient>) -> Self {
        Self { rpc_client }
    }

    /// Coin records for the given coin ids, bounded by confirmation
    /// height.
    pub async fn get_coin_records_by_names(
        &self,
        names: Vec<String>,
        start_height: Option<u32>,
        end_height: Option<u32>,
        include_spent_coins: bool,
    ) -> RpcResult<Vec<CoinRecord>> {
        let mut request = params(json!({
            "names": names,
            "include_spent_coins": include_spent_coins,
        }));
        if let Some(start) = start_height {
            request.insert("start_height".to_string(), json!(start));
        }
        if let Some(end) = end_height {
            request.insert("end_height".to_string(), json!(end));
        }
        let mut payload = self
            .rpc_client
            .call("get_coin_records_by_names", request)
            .await?;
        expect_typed(&mut payload, "get_coin_records_by_names", "coin_records")
    }
}
