//! Manual Bridge Minter - Wrapped Asset Issuance
//!
//! The Minter must be the sole minter of the wrapped CW20 token. The relayer
//! mints after observing a lock on the source side and burns before unlocking
//! there. Burning uses `BurnFrom`, so holders approve the Minter first.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
pub use crate::state::MinterRole;
