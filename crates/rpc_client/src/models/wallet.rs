// Copyright (C) 2023-2025 The Chia-RS Project.
//
// wallet.rs file belongs to the chia-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use serde::{Deserialize, Serialize};

/// One row of the `get_wallets` listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletInfo {
    /// Wallet id, unique within the logged-in key.
    pub id: u32,
    /// User-visible wallet name.
    pub name: String,
    /// Wallet type discriminant (standard, CAT, DID, NFT, pool, ...).
    #[serde(rename = "type")]
    pub wallet_type: u32,
    /// Type-specific wallet data blob.
    #[serde(default)]
    pub data: String,
}

/// Balance breakdown of one wallet, all amounts in mojos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletBalance {
    #[serde(default)]
    pub wallet_id: u32,
    pub confirmed_wallet_balance: u64,
    pub unconfirmed_wallet_balance: u64,
    pub spendable_balance: u64,
    #[serde(default)]
    pub pending_change: u64,
    #[serde(default)]
    pub max_send_amount: u64,
    #[serde(default)]
    pub unspent_coin_count: u32,
    #[serde(default)]
    pub pending_coin_removal_count: u32,
}

/// Wallet-side sync state against the connected full node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncStatus {
    /// Fully caught up with the node's peak.
    pub synced: bool,
    /// Currently walking the chain.
    #[serde(default)]
    pub syncing: bool,
    /// The wallet has processed the genesis challenge.
    #[serde(default)]
    pub genesis_initialized: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wallet_listing_row_maps_the_type_field() {
        let info: WalletInfo = serde_json::from_value(json!({
            "id": 2,
            "name": "CAT one",
            "type": 6,
            "data": "00",
        }))
        .unwrap();
        assert_eq!(info.wallet_type, 6);
    }

    #[test]
    fn balance_defaults_the_optional_counters() {
        let balance: WalletBalance = serde_json::from_value(json!({
            "confirmed_wallet_balance": 2_000_000_000_000u64,
            "unconfirmed_wallet_balance": 2_000_000_000_000u64,
            "spendable_balance": 1_999_999_999_000u64,
        }))
        .unwrap();
        assert_eq!(balance.spendable_balance, 1_999_999_999_000);
        assert_eq!(balance.unspent_coin_count, 0);
    }
}
