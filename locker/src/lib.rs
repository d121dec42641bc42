//! Manual Bridge Locker - Custody of the Source Asset
//!
//! The Locker holds the original CW20 asset while its wrapped counterpart
//! circulates on the destination side.
//!
//! # Outgoing Flow (Lock)
//! 1. User approves the Locker as spender on the source token
//! 2. Relayer calls `Lock { from, amount }`; tokens move into custody
//! 3. Relayer observes the `lock` event and mints on the destination Minter
//!
//! # Incoming Flow (Unlock)
//! 1. Relayer burns the wrapped tokens on the destination Minter
//! 2. Relayer calls `Unlock { to, amount }`; tokens leave custody
//!
//! # Security
//! - Role-gated operations (`lock`, `unlock`, `pauser`, `admin`)
//! - Emergency pause
//! - Custody can never go below zero

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
pub use crate::state::LockerRole;
