//! State definitions for the Locker contract

use common::BridgeRole;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::Item;

pub const CONTRACT_NAME: &str = "crates.io:bridge-locker";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Roles of the Locker
#[cw_serde]
#[derive(Copy, Eq)]
pub enum LockerRole {
    /// Grants and revokes roles
    Admin,
    /// Moves deposits into custody
    Lock,
    /// Releases custody to recipients
    Unlock,
    /// Pauses and unpauses
    Pauser,
}

impl BridgeRole for LockerRole {
    const ADMIN: Self = LockerRole::Admin;
    const PAUSER: Self = LockerRole::Pauser;
    const ALL: &'static [Self] = &[
        LockerRole::Admin,
        LockerRole::Lock,
        LockerRole::Unlock,
        LockerRole::Pauser,
    ];

    fn key(&self) -> &'static str {
        match self {
            LockerRole::Admin => "admin",
            LockerRole::Lock => "lock",
            LockerRole::Unlock => "unlock",
            LockerRole::Pauser => "pauser",
        }
    }
}

/// CW20 contract held in custody (set at instantiation)
pub const TOKEN: Item<Addr> = Item::new("token");

/// Units currently held in custody
pub const LOCK_BALANCE: Item<Uint128> = Item::new("lock_balance");
