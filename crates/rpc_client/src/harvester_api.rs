// Copyright (C) 2023-2025 The Chia-RS Project.
//
// harvester_api.rs file belongs to the chia-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::payload::{expect_typed, params};
use crate::rpc_client::RpcClient;
use crate::rpc_error::RpcResult;
use serde_json::{json, Map, Value};
use std::sync::Arc;

/// Plot management on the harvester service.
pub struct HarvesterApi {
    rpc_client: Arc<RpcClient>,
}

impl HarvesterApi {
    /// Creates the harvester API over an existing client.
    pub fn new(rpc_client: Arc<RpcClient>) -> Self {
        Self { rpc_client }
    }

    /// The harvester's plots, including files that failed to load.
    pub async fn get_plots(&self) -> RpcResult<Map<String, Value>> {
        self.rpc_client.call_empty("get_plots").await
    }

    /// Triggers a rescan of the plot directories.
    pub async fn refresh_plots(&self) -> RpcResult<Map<String, Value>> {
        self.rpc_client.call_empty("refresh_plots").await
    }

    /// Deletes a plot file by name.
    pub async fn delete_plot(&self, filename: &str) -> RpcResult<Map<String, Value>> {
        self.rpc_client
            .call("delete_plot", params(json!({"filename": filename})))
            .await
    }

    /// Adds a directory to the plot search path.
    pub async fn add_plot_directory(&self, dirname: &str) -> RpcResult<Map<String, Value>> {
        self.rpc_client
            .call("add_plot_directory", params(json!({"dirname": dirname})))
            .await
    }

    /// Removes a directory from the plot search path.
    pub async fn remove_plot_directory(&self, dirname: &str) -> RpcResult<Map<String, Value>> {
        self.rpc_client
            .call("remove_plot_directory", params(json!({"dirname": dirname})))
            .await
    }

    /// The configured plot directories.
    pub async fn get_plot_directories(&self) -> RpcResult<Vec<String>> {
        let mut payload = self.rpc_client.call_empty("get_plot_directories").await?;
        expect_typed(&mut payload, "get_plot_directories", "directories")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::{Client, Url};

    #[tokio::test]
    async fn plot_directories_are_extracted() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/get_plot_directories")
            .with_status(200)
            .with_body(r#"{"success": true, "directories": ["/plots/a", "/plots/b"]}"#)
            .create();

        let base = Url::parse(&format!("{}/", server.url())).expect("server url");
        let api = HarvesterApi::new(Arc::new(RpcClient::with_client(Client::new(), base)));
        let dirs = api.get_plot_directories().await.expect("directories");
        assert_eq!(dirs, vec!["/plots/a", "/plots/b"]);
    }
}
