// Copyright (C) 2023-2025 The Chia-RS Project.
//
// crawler_api.rs file belongs to the chia-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::payload::{expect_field, params};
use crate::rpc_client::RpcClient;
use crate::rpc_error::RpcResult;
use serde_json::{json, Map, Value};
use std::sync::Arc;

/// Network crawler statistics.
pub struct CrawlerApi {
    rpc_client: Arc<RpcClient>,
}

impl CrawlerApi {
    /// Creates the crawler API over an existing client.
    pub fn new(rpc_client: Arc<RpcClient>) -> Self {
        Self { rpc_client }
    }

    /// Aggregate peer counts by version, country and reachability.
    pub async fn get_peer_counts(&self) -> RpcResult<Value> {
        let mut payload = self.rpc_client.call_empty("get_peer_counts").await?;
        expect_field(&mut payload, "get_peer_counts", "peer_counts")
    }

    /// Peer addresses seen after `after` (unix seconds), paged.
    pub async fn get_ips_after_timestamp(
        &self,
        after: u64,
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> RpcResult<Map<String, Value>> {
        let mut request = params(json!({"after": after}));
        if let Some(offset) = offset {
            request.insert("offset".to_string(), json!(offset));
        }
        if let Some(limit) = limit {
            request.insert("limit".to_string(), json!(limit));
        }
        self.rpc_client.call("get_ips_after_timestamp", request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::{Client, Url};

    #[tokio::test]
    async fn peer_counts_are_extracted() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/get_peer_counts")
            .with_status(200)
            .with_body(r#"{"success": true, "peer_counts": {"total_last_5_days": 21212}}"#)
            .create();

        let base = Url::parse(&format!("{}/", server.url())).expect("server url");
        let api = CrawlerApi::new(Arc::new(RpcClient::with_client(Client::new(), base)));
        let counts = api.get_peer_counts().await.expect("counts");
        assert_eq!(counts["total_last_5_days"], json!(21212));
    }
}
