// Copyright (C) 2023-2025 The Chia-RS Project.
//
// network.rs file belongs to the chia-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use serde::{Deserialize, Serialize};

/// One peer connection of a service, as listed by `get_connections`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionInfo {
    /// Peer node id, hex.
    #[serde(default)]
    pub node_id: String,
    #[serde(default)]
    pub peer_host: String,
    #[serde(default)]
    pub peer_port: u16,
    /// Port the peer accepts inbound connections on.
    #[serde(default)]
    pub peer_server_port: u16,
    /// Protocol node type of the peer (full node, wallet, farmer, ...).
    #[serde(rename = "type", default)]
    pub connection_type: u8,
    #[serde(default)]
    pub creation_time: f64,
    #[serde(default)]
    pub bytes_read: u64,
    #[serde(default)]
    pub bytes_written: u64,
}

/// Result of `get_network_info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkInfo {
    /// Network name, e.g. `mainnet`.
    pub network_name: String,
    /// Bech32 address prefix, e.g. `xch`.
    pub network_prefix: String,
}
