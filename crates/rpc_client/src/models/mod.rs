// Copyright (C) 2023-2025 The Chia-RS Project.
//
// mod.rs file belongs to the chia-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Wire models: the request/response envelope plus permissive typed views
//! of the most-used response fields. Models only reshape — validation of
//! business rules stays on the service side.

mod coin_record;
mod network;
mod request;
mod response;
mod transaction_record;
mod wallet;

pub use coin_record::{Coin, CoinRecord};
pub use network::{ConnectionInfo, NetworkInfo};
pub use request::RpcRequest;
pub use response::RpcResponse;
pub use transaction_record::TransactionRecord;
pub use wallet::{SyncStatus, WalletBalance, WalletInfo};
