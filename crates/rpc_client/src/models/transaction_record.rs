// Copyright (C) 2023-2025 The Chia-RS Project.
//
// transaction_record.rs file belongs to the chia-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use super::Coin;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A wallet transaction as returned by `get_transaction(s)` and the send
/// operations.
///
/// The wallet's transaction schema is wide and still grows; everything
/// beyond the identity fields is defaulted, and the spend bundle and memos
/// stay raw values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Transaction id, hex with `0x` prefix.
    pub name: String,
    #[serde(default)]
    pub wallet_id: u32,
    /// Amount moved, in mojos.
    #[serde(default)]
    pub amount: u64,
    #[serde(default)]
    pub fee_amount: u64,
    #[serde(default)]
    pub confirmed: bool,
    #[serde(default)]
    pub confirmed_at_height: u32,
    #[serde(default)]
    pub created_at_time: u64,
    #[serde(default)]
    pub to_address: String,
    /// How many peers the transaction has been sent to.
    #[serde(default)]
    pub sent: u32,
    #[serde(default)]
    pub additions: Vec<Coin>,
    #[serde(default)]
    pub removals: Vec<Coin>,
    /// Wallet transaction type discriminant.
    #[serde(rename = "type", default)]
    pub transaction_type: u32,
    /// Attached memos, keyed by coin id.
    #[serde(default)]
    pub memos: Value,
    /// The signed spend bundle, present until confirmation.
    #[serde(default)]
    pub spend_bundle: Value,
}
