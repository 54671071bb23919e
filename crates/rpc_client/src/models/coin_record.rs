// Copyright (C) 2023-2025 The Chia-RS Project.
//
// coin_record.rs file belongs to the chia-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use serde::{Deserialize, Serialize};

/// A coin as the services report it on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    /// Parent coin id, hex with `0x` prefix.
    pub parent_coin_info: String,
    /// Puzzle hash the coin is locked to, hex with `0x` prefix.
    pub puzzle_hash: String,
    /// Value in mojos.
    pub amount: u64,
}

/// A coin together with its chain bookkeeping.
///
/// Kept permissive: fields the service omits default to zero/false so the
/// model survives schema additions on the node side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinRecord {
    /// The coin itself.
    pub coin: Coin,
    /// Height the coin was confirmed at.
    #[serde(default)]
    pub confirmed_block_index: u32,
    /// Height the coin was spent at; zero while unspent.
    #[serde(default)]
    pub spent_block_index: u32,
    /// Whether the coin has been spent.
    #[serde(default)]
    pub spent: bool,
    /// Whether the coin is a farming reward.
    #[serde(default)]
    pub coinbase: bool,
    /// Creation timestamp in seconds.
    #[serde(default)]
    pub timestamp: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_a_node_coin_record() {
        let record: CoinRecord = serde_json::from_value(json!({
            "coin": {
                "parent_coin_info": "0xabc0",
                "puzzle_hash": "0xdef1",
                "amount": 1_750_000_000_000u64,
            },
            "confirmed_block_index": 500_004,
            "spent_block_index": 0,
            "spent": false,
            "coinbase": true,
            "timestamp": 1_689_000_000,
        }))
        .unwrap();
        assert_eq!(record.coin.amount, 1_750_000_000_000);
        assert!(record.coinbase);
        assert!(!record.spent);
    }

    #[test]
    fn omitted_bookkeeping_defaults() {
        let record: CoinRecord = serde_json::from_value(json!({
            "coin": {"parent_coin_info": "0x00", "puzzle_hash": "0x01", "amount": 1},
        }))
        .unwrap();
        assert_eq!(record.spent_block_index, 0);
        assert_eq!(record.timestamp, 0);
    }
}
