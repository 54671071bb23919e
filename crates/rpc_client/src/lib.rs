// Copyright (C) 2023-2025 The Chia-RS Project.
//
// lib.rs file belongs to the chia-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Chia RPC Client Library
//!
//! The generic invocation core plus one thin endpoint API per service
//! domain. [`RpcClient::call`] turns a method name and a flat parameter
//! map into exactly one HTTPS round trip; the endpoint APIs shape typed
//! arguments into that map and hand back the decoded result, nothing more.
//!
//! Failures are split three ways — transport, decode, remote — so callers
//! can tell a network problem from a parse problem from the service
//! rejecting the request, without inspecting raw payloads.

pub mod models;
mod payload;
mod rpc_client;
mod rpc_error;

mod cat_wallet_api;
mod coin_api;
mod crawler_api;
mod data_layer_api;
mod did_wallet_api;
mod farmer_api;
mod full_node_api;
mod harvester_api;
mod key_management_api;
mod nft_wallet_api;
mod notification_api;
mod pool_wallet_api;
mod shared_api;
mod wallet_api;
mod wallet_management_api;
mod wallet_node_api;

pub use rpc_client::RpcClient;
pub use rpc_error::{RpcError, RpcResult};

pub use cat_wallet_api::{CatSpend, CatWalletApi};
pub use coin_api::CoinApi;
pub use crawler_api::CrawlerApi;
pub use data_layer_api::DataLayerApi;
pub use did_wallet_api::DidWalletApi;
pub use farmer_api::FarmerApi;
pub use full_node_api::FullNodeApi;
pub use harvester_api::HarvesterApi;
pub use key_management_api::KeyManagementApi;
pub use nft_wallet_api::NftWalletApi;
pub use notification_api::NotificationApi;
pub use pool_wallet_api::PoolWalletApi;
pub use shared_api::SharedApi;
pub use wallet_api::WalletApi;
pub use wallet_management_api::WalletManagementApi;
pub use wallet_node_api::WalletNodeApi;

// Re-export commonly used types
pub use models::{
    Coin, CoinRecord, ConnectionInfo, NetworkInfo, RpcRequest, RpcResponse, SyncStatus,
    TransactionRecord, WalletBalance, WalletInfo,
};
