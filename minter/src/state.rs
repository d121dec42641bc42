use common::BridgeRole;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::Item;

pub const CONTRACT_NAME: &str = "crates.io:bridge-minter";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cw_serde]
#[derive(Copy, Eq)]
pub enum MinterRole {
    Admin,
    Mint,
    Burn,
    Pauser,
}

impl BridgeRole for MinterRole {
    const ADMIN: Self = MinterRole::Admin;
    const PAUSER: Self = MinterRole::Pauser;
    const ALL: &'static [Self] = &[
        MinterRole::Admin,
        MinterRole::Mint,
        MinterRole::Burn,
        MinterRole::Pauser,
    ];

    fn key(&self) -> &'static str {
        match self {
            MinterRole::Admin => "admin",
            MinterRole::Mint => "mint",
            MinterRole::Burn => "burn",
            MinterRole::Pauser => "pauser",
        }
    }
}

/// Wrapped CW20 contract (set at instantiation)
pub const TOKEN: Item<Addr> = Item::new("token");
