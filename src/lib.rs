//! # Chia-RS: Chia RPC client bindings in Rust
//!
//! Client bindings for the JSON-over-HTTPS RPC interface exposed by the
//! Chia full node, wallet, farmer, harvester, crawler and data-layer
//! services.
//!
//! Every operation is a direct pass-through to the remote service: typed
//! arguments are shaped into a flat JSON parameter map, posted to the
//! method-named path on the service's RPC port, and the decoded response is
//! handed back to the caller. Consensus, key management, transaction
//! construction and signing all stay on the node side.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use chia_rs::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Connect to the local wallet service with the standard certificates.
//!     let client = Arc::new(RpcClient::for_service(Service::Wallet)?);
//!
//!     let wallet = WalletApi::new(client.clone());
//!     let balance = wallet.get_wallet_balance(1).await?;
//!     println!("spendable: {}", balance.spendable_balance);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! The workspace is organized into two crates:
//!
//! - [`chia_config`] - connection configuration: service ports, certificate
//!   locations, timeouts
//! - [`chia_rpc_client`] - the transport client and the per-service
//!   endpoint APIs
//!
//! The transport client performs exactly one bounded round trip per call
//! and never retries; resubmission of transactions after a timeout is an
//! explicit caller decision.

#![warn(missing_docs)]

// Re-export all public APIs from the member crates
pub use chia_config as config;
pub use chia_rpc_client as rpc_client;

/// Common imports for working against a Chia node.
pub mod prelude {
    pub use crate::config::{ClientConfig, Service, SslConfig};
    pub use crate::rpc_client::{
        CrawlerApi, FarmerApi, FullNodeApi, HarvesterApi, RpcClient, RpcError, RpcResult,
        SharedApi, WalletApi,
    };
}
