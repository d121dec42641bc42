//! Error types for the Locker contract

use common::GuardError;
use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    /// Role, pause and argument failures
    #[error(transparent)]
    Guard(#[from] GuardError),

    #[error("Insufficient custody: requested {requested}, held {held}")]
    InsufficientCustody { requested: Uint128, held: Uint128 },
}
