//! Argument checks applied before any balance is touched.

use cosmwasm_std::{Addr, Api, Uint128};

use crate::error::GuardError;

/// Validate a principal supplied by the caller.
///
/// An empty or whitespace-only string stands for "no principal" and is
/// rejected the same way as a malformed address, naming the offending field.
pub fn validate_principal(api: &dyn Api, field: &str, value: &str) -> Result<Addr, GuardError> {
    if value.trim().is_empty() {
        return Err(GuardError::invalid_argument(field, "address is empty"));
    }

    api.addr_validate(value)
        .map_err(|e| GuardError::invalid_argument(field, e.to_string()))
}

/// Reject zero amounts.
pub fn validate_amount(amount: Uint128) -> Result<Uint128, GuardError> {
    if amount.is_zero() {
        return Err(GuardError::invalid_argument("amount", "amount is zero"));
    }
    Ok(amount)
}
